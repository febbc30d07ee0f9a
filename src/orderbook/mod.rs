//! OrderBook implementation: a price-sorted index and an id-keyed
//! back-reference index over one set of live orders.

pub mod book;
mod error;
mod operations;
mod order;
mod snapshot;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use order::{Order, OrderId, Price, Timestamp};
pub use snapshot::OrderBookSnapshot;
