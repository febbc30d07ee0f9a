//! File-backed message feed.
//!
//! The feed pre-loads the whole input file into memory (one entry per
//! non-blank line) and then hands out parsed messages one at a time, the way
//! the replay driver consumes them.

use super::error::MarketDataError;
use super::message::Message;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A pre-loaded sequence of market data messages read from a file
#[derive(Debug)]
pub struct MarketDataFeed {
    messages: Vec<String>,
    cursor: usize,
}

impl MarketDataFeed {
    /// Load a market data file. Blank lines are dropped; everything else is
    /// kept verbatim and parsed lazily during iteration, so one malformed
    /// line does not prevent the rest of the file from being replayed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MarketDataError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MarketDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let messages: Vec<String> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect();

        debug!(
            "Loaded {} messages from {}",
            messages.len(),
            path.display()
        );
        Ok(Self {
            messages,
            cursor: 0,
        })
    }

    /// Number of messages in the feed, consumed or not
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the feed holds no messages at all
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Iterator for MarketDataFeed {
    type Item = Result<Message, MarketDataError>;

    fn next(&mut self) -> Option<Self::Item> {
        let message = self.messages.get(self.cursor)?.parse();
        self.cursor += 1;
        Some(message)
    }
}
