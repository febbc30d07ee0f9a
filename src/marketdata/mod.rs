//! Market data input: the line-oriented message format and the file-backed
//! feed that yields parsed messages to the processing loop.

mod error;
mod feed;
mod message;

pub use error::MarketDataError;
pub use feed::MarketDataFeed;
pub use message::Message;
