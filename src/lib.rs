//! # Dual-Indexed Order Book with Time-Weighted Highest-Price Analytics
//!
//! A limit order book implementation optimized for one question: "what is the
//! highest-priced outstanding order right now?" The book maintains two indices
//! over a single set of live orders and keeps them consistent through every
//! insert and erase:
//!
//! - **Price index**: a sorted map ordered by descending price, with a
//!   deterministic earliest-insertion-first tie-break among equal prices.
//!   The highest price is always the first entry, so the query is O(1).
//!
//! - **Identity index**: a hash map from order id to the order's position in
//!   the price index, so an erase never has to search by price. The identity
//!   index is a pure back-reference; the price index is the sole owner of
//!   order records.
//!
//! On top of the book, [`TimeWeightedAverage`] integrates the highest-price
//! step function over event time: fed once after every successful mutation,
//! it yields the time-weighted average of the highest outstanding price
//! across a full replay.
//!
//! ## Key Properties
//!
//! - **O(log n) insert, O(log n) erase, O(1) highest-price query**: erase
//!   resolves the order's position through the identity index rather than a
//!   second ordered search.
//! - **No partial mutation**: a rejected insert (duplicate id) or erase
//!   (unknown id) leaves both indices exactly as they were.
//! - **Deterministic ties**: among equal-priced orders, the earlier insertion
//!   occupies the earlier position, so replays are reproducible.
//! - **Explicit absence**: "no orders" and "no observed interval" are modeled
//!   as `Option`, never as a floating-point NaN that must be compared.
//!
//! ## Market Data Replay
//!
//! The [`marketdata`] module parses the line-oriented message format this
//! book is typically fed from (`<ts> I <id> <price>` / `<ts> E <id>`), and
//! the `twap` binary replays such a file end to end, skipping malformed or
//! inconsistent messages and reporting the time-weighted average highest
//! price at end of stream.
//!
//! The crate is single-threaded by design: one writer drives the book and
//! the aggregator in lockstep, and the two indices are only ever updated as
//! one unit.

pub mod analytics;
pub mod marketdata;
pub mod orderbook;

mod utils;

pub use analytics::TimeWeightedAverage;
pub use marketdata::{MarketDataError, MarketDataFeed, Message};
pub use orderbook::{Order, OrderBook, OrderBookError, OrderBookSnapshot};
pub use utils::current_time_millis;
