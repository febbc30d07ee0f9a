//! Order book error types

use super::order::OrderId;
use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Insert called with an id that is already live in the book
    DuplicateOrderId(OrderId),

    /// Erase called with an id that is not live in the book
    OrderNotFound(OrderId),

    /// Insert called with an order that carries no price
    MissingPrice(OrderId),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::DuplicateOrderId(id) => {
                write!(f, "Duplicate order id: {} is already live", id)
            }
            OrderBookError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
            OrderBookError::MissingPrice(id) => {
                write!(f, "Order {} has no price and cannot be inserted", id)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
