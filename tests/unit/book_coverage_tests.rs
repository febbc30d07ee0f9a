//! Unit tests driving the order book through its public API

#[cfg(test)]
mod book_coverage_tests {
    use orderbook_twap::{Order, OrderBook, OrderBookError};

    #[test]
    fn test_highest_price_over_long_mixed_sequence() {
        let mut book = OrderBook::new("COVERAGE");

        // Insert 100 orders with prices that rise then fall
        for id in 0..100u32 {
            let price = if id < 50 {
                f64::from(id)
            } else {
                f64::from(100 - id)
            };
            book.insert(Order::new(id, price, u64::from(id))).unwrap();
        }
        assert_eq!(book.len(), 100);
        assert_eq!(book.highest_price(), Some(50.0));

        // Erase the peak; the next-highest equal pair (49.0) takes over
        book.erase(&Order::erase_only(50, 100)).unwrap();
        assert_eq!(book.highest_price(), Some(49.0));

        // Erase everything above 25.0 and verify the max steps down
        for id in (26..50u32).chain(51..75) {
            book.erase(&Order::erase_only(id, 200)).unwrap();
        }
        assert_eq!(book.highest_price(), Some(25.0));
    }

    #[test]
    fn test_failed_operations_never_split_the_indices() {
        let mut book = OrderBook::new("COVERAGE");

        book.insert(Order::new(1, 10.0, 0)).unwrap();
        book.insert(Order::new(2, 20.0, 1)).unwrap();

        assert!(matches!(
            book.insert(Order::new(1, 30.0, 2)),
            Err(OrderBookError::DuplicateOrderId(1))
        ));
        assert!(matches!(
            book.erase(&Order::erase_only(3, 3)),
            Err(OrderBookError::OrderNotFound(3))
        ));

        // Both indices still agree on the live set
        assert_eq!(book.len(), 2);
        assert_eq!(book.iter().count(), 2);
        assert!(book.contains(1));
        assert!(book.contains(2));
        assert_eq!(book.highest_price(), Some(20.0));
    }

    #[test]
    fn test_snapshot_reflects_tie_break_order() {
        let mut book = OrderBook::new("COVERAGE");

        book.insert(Order::new(10, 5.0, 0)).unwrap();
        book.insert(Order::new(11, 5.0, 1)).unwrap();
        book.insert(Order::new(12, 5.0, 2)).unwrap();

        let snapshot = book.snapshot();
        let ids: Vec<u32> = snapshot.orders.iter().map(|order| order.id()).collect();
        assert_eq!(ids, vec![10, 11, 12]);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"symbol\":\"COVERAGE\""));
    }

    #[test]
    fn test_round_trip_returns_to_empty_repeatedly() {
        let mut book = OrderBook::new("COVERAGE");

        for round in 0..3u64 {
            for id in 0..20u32 {
                book.insert(Order::new(id, f64::from(id), round)).unwrap();
            }
            for id in (0..20u32).rev() {
                book.erase(&Order::erase_only(id, round)).unwrap();
            }
            assert!(book.is_empty());
            assert_eq!(book.highest_price(), None);
        }
    }
}
