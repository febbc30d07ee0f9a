//! Market data error types

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading or parsing market data
#[derive(Debug)]
pub enum MarketDataError {
    /// The input file could not be read
    Io {
        /// Path of the file that failed to load
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// A message line did not conform to the expected format
    Parse {
        /// The offending line, as read from the input
        line: String,
        /// What was wrong with it
        reason: String,
    },
}

impl fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataError::Io { path, source } => {
                write!(
                    f,
                    "Cannot read market data file {}: {}",
                    path.display(),
                    source
                )
            }
            MarketDataError::Parse { line, reason } => {
                write!(f, "Cannot parse message \"{}\": {}", line, reason)
            }
        }
    }
}

impl std::error::Error for MarketDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarketDataError::Io { source, .. } => Some(source),
            MarketDataError::Parse { .. } => None,
        }
    }
}
