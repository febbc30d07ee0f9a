//! Streaming analytics over the order book's highest-price output.

mod twap;

pub use twap::TimeWeightedAverage;
