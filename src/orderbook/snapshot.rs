//! Order book snapshot for reporting and serialization

use super::order::{Order, Price};
use serde::{Deserialize, Serialize};

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Live orders in descending-price order; equal prices appear in
    /// insertion order
    pub orders: Vec<Order>,
}

impl OrderBookSnapshot {
    /// Get the highest price at snapshot time
    pub fn highest_price(&self) -> Option<Price> {
        self.orders.first().and_then(|order| order.price())
    }

    /// Number of live orders at snapshot time
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the book was empty at snapshot time
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
