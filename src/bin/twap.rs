//! Market data replay driver.
//!
//! Reads a line-oriented market data file (`<ts> I <id> <price>` to insert,
//! `<ts> E <id>` to erase), drives the order book with each message, feeds
//! the book's highest price into the time-weighted aggregator after every
//! successful mutation, and prints the time-weighted average highest price
//! at end of stream.
//!
//! Malformed or inconsistent messages (duplicate inserts, erases of unknown
//! ids) are logged and skipped; a single bad message never aborts the run.
//! Only an unreadable input file is fatal.

use clap::{Arg, Command};
use orderbook_twap::{
    MarketDataFeed, Message, OrderBook, TimeWeightedAverage, current_time_millis,
};
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let matches = Command::new("twap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replays a market data file and reports the time-weighted average of the highest outstanding order price")
        .arg(
            Arg::new("FILE")
                .help("Market data file to replay, one insert/erase message per line")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = match matches.get_one::<String>("FILE") {
        Some(path) => path.clone(),
        None => {
            error!("Missing input file argument");
            process::exit(2);
        }
    };

    process::exit(run(&path));
}

fn run(path: &str) -> i32 {
    let started = current_time_millis();

    let feed = match MarketDataFeed::from_path(path) {
        Ok(feed) => feed,
        Err(err) => {
            error!("{}", err);
            return 1;
        }
    };

    let mut book = OrderBook::new("replay");
    let mut twap = TimeWeightedAverage::new();
    let mut processed: u64 = 0;
    let mut skipped: u64 = 0;

    for (index, message) in feed.enumerate() {
        let message = match message {
            Ok(message) => message,
            Err(err) => {
                warn!("Message {}: {}", index + 1, err);
                skipped += 1;
                continue;
            }
        };

        let result = match message {
            Message::Insert { .. } => book.insert(message.order()),
            Message::Erase { .. } => book.erase(&message.order()).map(|_| ()),
        };
        if let Err(err) = result {
            warn!("Message {}: {}", index + 1, err);
            skipped += 1;
            continue;
        }

        twap.update(book.highest_price(), message.timestamp());
        processed += 1;
    }

    match twap.get() {
        Some(average) => println!("Time-weighted average highest price: {}", average),
        None => println!("Time-weighted average highest price: NaN"),
    }

    info!(
        "Processed {} messages ({} skipped, {} still live) in {} ms",
        processed,
        skipped,
        book.len(),
        current_time_millis().saturating_sub(started)
    );
    0
}
