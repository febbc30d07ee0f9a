//! Unit tests replaying a market data file end to end through the feed

#[cfg(test)]
mod marketdata_coverage_tests {
    use orderbook_twap::{MarketDataFeed, Message, OrderBook, TimeWeightedAverage};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_file_replay() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "1000 I 100 10.0\n\
             2000 I 101 13.0\n\
             2200 I 102 13.0\n\
             2400 E 101\n\
             2500 E 102\n\
             4000 E 100\n"
        )
        .unwrap();

        let feed = MarketDataFeed::from_path(file.path()).unwrap();
        let mut book = OrderBook::new("replay");
        let mut twap = TimeWeightedAverage::new();

        for message in feed {
            let message = message.unwrap();
            match message {
                Message::Insert { .. } => book.insert(message.order()).unwrap(),
                Message::Erase { .. } => {
                    book.erase(&message.order()).unwrap();
                }
            }
            twap.update(book.highest_price(), message.timestamp());
        }

        assert!(book.is_empty());
        // 10.0 over [1000,2000), 13.0 over [2000,2500), 10.0 over [2500,4000)
        let expected = (10.0 * 1000.0 + 13.0 * 500.0 + 10.0 * 1500.0) / 3000.0;
        assert_eq!(twap.elapsed(), 3000);
        let average = twap.get().unwrap();
        assert!((average - expected).abs() < 1e-12);
    }

    #[test]
    fn test_replay_skips_bad_lines_and_continues() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "1000 I 1 10.0\n\
             garbage line\n\
             2000 Q 2 11.0\n\
             3000 E 1\n"
        )
        .unwrap();

        let feed = MarketDataFeed::from_path(file.path()).unwrap();
        let mut book = OrderBook::new("replay");
        let mut twap = TimeWeightedAverage::new();
        let mut skipped = 0;

        for message in feed {
            let Ok(message) = message else {
                skipped += 1;
                continue;
            };
            let applied = match message {
                Message::Insert { .. } => book.insert(message.order()).is_ok(),
                Message::Erase { .. } => book.erase(&message.order()).is_ok(),
            };
            if applied {
                twap.update(book.highest_price(), message.timestamp());
            }
        }

        assert_eq!(skipped, 2);
        assert!(book.is_empty());
        assert_eq!(twap.get(), Some(10.0));
    }
}
