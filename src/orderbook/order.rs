//! The immutable order value record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, caller-assigned order identifier
pub type OrderId = u32;

/// Event timestamp in milliseconds
pub type Timestamp = u64;

/// Limit price
pub type Price = f64;

/// A single limit order as produced from external input.
///
/// Orders are immutable once constructed; the book never changes a stored
/// order's fields. `price` is `None` only for orders built from erase-only
/// messages, which carry no price of their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    price: Option<Price>,
    timestamp: Timestamp,
}

impl Order {
    /// Create an order with a limit price
    pub fn new(id: OrderId, price: Price, timestamp: Timestamp) -> Self {
        Self {
            id,
            price: Some(price),
            timestamp,
        }
    }

    /// Create a priceless order, as built from an erase message
    pub fn erase_only(id: OrderId, timestamp: Timestamp) -> Self {
        Self {
            id,
            price: None,
            timestamp,
        }
    }

    /// The caller-assigned identifier
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The limit price, if this order carries one
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    /// The event timestamp in milliseconds
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.price {
            Some(price) => write!(
                f,
                "Order {}: {} {} {}",
                self.id, self.timestamp, self.id, price
            ),
            None => write!(f, "Order {}: {} {} -", self.id, self.timestamp, self.id),
        }
    }
}
