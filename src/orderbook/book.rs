//! Core OrderBook implementation: the price index, the identity index, and
//! the read-only queries over them.

use super::order::{Order, OrderId, Price};
use super::snapshot::OrderBookSnapshot;
use crate::utils::current_time_millis;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Stable handle locating an order inside the price index.
///
/// Handles order by descending price, then by ascending insertion sequence,
/// so the first entry of the price index is always the highest-priced,
/// earliest-inserted live order. Handles never leave this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct PricePosition {
    price: Reverse<OrderedFloat<Price>>,
    seq: u64,
}

impl PricePosition {
    pub(super) fn new(price: Price, seq: u64) -> Self {
        Self {
            price: Reverse(OrderedFloat(price)),
            seq,
        }
    }

    pub(super) fn price(&self) -> Price {
        self.price.0.into_inner()
    }
}

/// The OrderBook manages the set of live orders through two indices kept in
/// lockstep: a price-sorted map that owns the orders, and an id-keyed map of
/// back-references into it for O(1)-style lookup by identifier.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Price index: sole owner of live orders, sorted by descending price
    /// with earliest-insertion-first tie-break among equal prices
    pub(super) by_price: BTreeMap<PricePosition, Order>,

    /// Identity index: back-references from order id into the price index.
    /// Invariant: every entry points at an existing price-index position
    /// holding the order with that id, and vice versa.
    pub(super) by_id: HashMap<OrderId, PricePosition>,

    /// Monotone counter stamped on each insert; breaks price ties
    pub(super) next_seq: u64,
}

impl OrderBook {
    /// Create a new, empty order book for the given symbol
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            by_price: BTreeMap::new(),
            by_id: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the highest price among live orders, or `None` if the book is
    /// empty. O(1): the price index keeps the maximum at its first entry.
    pub fn highest_price(&self) -> Option<Price> {
        self.by_price.first_key_value().map(|(pos, _)| pos.price())
    }

    /// Number of live orders
    pub fn len(&self) -> usize {
        self.by_price.len()
    }

    /// Whether the book holds no live orders
    pub fn is_empty(&self) -> bool {
        self.by_price.is_empty()
    }

    /// Whether an order with the given id is live
    pub fn contains(&self, id: OrderId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get a live order by id
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        let pos = self.by_id.get(&id)?;
        self.by_price.get(pos)
    }

    /// Iterate over live orders in descending-price order; equal prices come
    /// out in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.by_price.values()
    }

    /// Take a snapshot of the current book state
    pub fn snapshot(&self) -> OrderBookSnapshot {
        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            orders: self.iter().copied().collect(),
        }
    }
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for order in self.iter() {
            match order.price() {
                Some(price) => writeln!(f, "{}\t\t\t// {}", price, order)?,
                None => writeln!(f, "-\t\t\t// {}", order)?,
            }
        }
        Ok(())
    }
}
