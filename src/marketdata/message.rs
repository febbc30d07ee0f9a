//! The insert/erase message format.
//!
//! One message per line, space-delimited:
//!
//! ```text
//! 2000 I 101 44.10      // insert order 101 at price 44.10, timestamp 2000
//! 2100 E 101            // erase order 101, timestamp 2100
//! ```

use super::error::MarketDataError;
use crate::orderbook::{Order, OrderId, Price, Timestamp};
use std::str::FromStr;

/// A parsed, type-validated market data message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Insert a new order at a limit price
    Insert {
        /// Caller-assigned order id
        id: OrderId,
        /// Limit price
        price: Price,
        /// Event timestamp in milliseconds
        timestamp: Timestamp,
    },

    /// Erase a previously inserted order
    Erase {
        /// Id of the order to erase
        id: OrderId,
        /// Event timestamp in milliseconds
        timestamp: Timestamp,
    },
}

impl Message {
    /// The event timestamp carried by the message
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Message::Insert { timestamp, .. } | Message::Erase { timestamp, .. } => *timestamp,
        }
    }

    /// The order id carried by the message
    pub fn id(&self) -> OrderId {
        match self {
            Message::Insert { id, .. } | Message::Erase { id, .. } => *id,
        }
    }

    /// Build the order this message describes. Erase messages yield a
    /// priceless order; the book's erase only consults the id.
    pub fn order(&self) -> Order {
        match *self {
            Message::Insert {
                id,
                price,
                timestamp,
            } => Order::new(id, price, timestamp),
            Message::Erase { id, timestamp } => Order::erase_only(id, timestamp),
        }
    }
}

impl FromStr for Message {
    type Err = MarketDataError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| MarketDataError::Parse {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(parse_err("expected at least 3 fields"));
        }

        let timestamp: Timestamp = tokens[0]
            .parse()
            .map_err(|_| parse_err("invalid timestamp"))?;
        let id: OrderId = tokens[2]
            .parse()
            .map_err(|_| parse_err("invalid order id"))?;

        match tokens[1] {
            "I" => {
                let price: Price = tokens
                    .get(3)
                    .ok_or_else(|| parse_err("insert message is missing a price"))?
                    .parse()
                    .map_err(|_| parse_err("invalid price"))?;
                if !price.is_finite() {
                    return Err(parse_err("invalid price"));
                }
                Ok(Message::Insert {
                    id,
                    price,
                    timestamp,
                })
            }
            "E" => Ok(Message::Erase { id, timestamp }),
            other => Err(parse_err(&format!("unknown message type \"{}\"", other))),
        }
    }
}
