//! Order book mutations: inserting and erasing orders.
//!
//! Both operations either succeed and update the two indices as one unit, or
//! fail and leave the book exactly as it was. There is no state in which one
//! index holds an entry the other does not.

use super::book::{OrderBook, PricePosition};
use super::error::OrderBookError;
use super::order::Order;
use tracing::trace;

impl OrderBook {
    /// Insert an order into the book.
    ///
    /// The order lands in the price index at the position dictated by
    /// descending price and insertion order, and the identity index records
    /// a back-reference to that position. O(log n), dominated by the sorted
    /// insertion.
    ///
    /// Fails with [`OrderBookError::DuplicateOrderId`] if an order with the
    /// same id is already live, and with [`OrderBookError::MissingPrice`] if
    /// the order carries no price. The book is unchanged on failure.
    pub fn insert(&mut self, order: Order) -> Result<(), OrderBookError> {
        let Some(price) = order.price() else {
            return Err(OrderBookError::MissingPrice(order.id()));
        };
        if self.by_id.contains_key(&order.id()) {
            return Err(OrderBookError::DuplicateOrderId(order.id()));
        }

        let pos = PricePosition::new(price, self.next_seq);
        self.next_seq += 1;
        self.by_price.insert(pos, order);
        self.by_id.insert(order.id(), pos);

        trace!(
            "Order book {}: inserted order {} at price {}",
            self.symbol,
            order.id(),
            price
        );
        Ok(())
    }

    /// Erase an order from the book. Only `order.id` is consulted; the other
    /// fields are ignored, so an order built from an erase-only message works.
    ///
    /// The identity index hands back the order's position directly, so no
    /// ordered search by price is needed. Returns the removed order.
    ///
    /// Fails with [`OrderBookError::OrderNotFound`] if the id is not live;
    /// the book is unchanged on failure.
    pub fn erase(&mut self, order: &Order) -> Result<Order, OrderBookError> {
        let id = order.id();
        let pos = *self
            .by_id
            .get(&id)
            .ok_or(OrderBookError::OrderNotFound(id))?;

        // The back-reference is kept in lockstep with the price index, so
        // this removal cannot miss once the id lookup has succeeded.
        let removed = self
            .by_price
            .remove(&pos)
            .ok_or(OrderBookError::OrderNotFound(id))?;
        self.by_id.remove(&id);

        trace!("Order book {}: erased order {}", self.symbol, id);
        Ok(removed)
    }
}
