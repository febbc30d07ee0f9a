//! Time-weighted average of the highest outstanding price.

use crate::orderbook::{Price, Timestamp};

/// Accumulates the time-weighted average of the order book's highest price
/// across a sequence of mutations.
///
/// Feed [`update`](Self::update) once after every successful insert or erase
/// with the book's current highest price and the event's timestamp. The
/// aggregator treats the previous highest price as having held constant over
/// the interval between consecutive events, integrates that step function,
/// and [`get`](Self::get) divides by total elapsed time.
///
/// One instance covers one processing run; there is no reset.
#[derive(Debug, Default)]
pub struct TimeWeightedAverage {
    /// Sum of highest prices weighted by how long each was in effect
    weighted_sum: f64,

    /// Total time over which `weighted_sum` was accumulated
    elapsed: u64,

    /// The highest price in effect since `since`, or `None` while the book
    /// is empty (or before the first update)
    current: Option<Price>,

    /// Timestamp at which `current` took effect
    since: Timestamp,
}

impl TimeWeightedAverage {
    /// Create an aggregator with no observations
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the highest price in effect after the latest book mutation.
    ///
    /// Step one: if a previous price is in effect, attribute the interval
    /// `[since, timestamp)` to it. Step two: unconditionally make `new_max`
    /// the price in effect from `timestamp` on. The first call has no
    /// baseline and only performs step two, so no interval is ever
    /// attributed to an undefined price; intervals while the book is empty
    /// are likewise excluded.
    ///
    /// Caller contract: calls arrive once per successful mutation, in event
    /// order with non-decreasing timestamps. This is not verified; the
    /// result of out-of-order calls is meaningless.
    pub fn update(&mut self, new_max: Option<Price>, timestamp: Timestamp) {
        if let Some(price) = self.current {
            let interval = timestamp.saturating_sub(self.since);
            self.elapsed += interval;
            self.weighted_sum += price * interval as f64;
        }

        self.current = new_max;
        self.since = timestamp;
    }

    /// The time-weighted average highest price, or `None` if no non-zero
    /// interval has been observed yet. O(1), callable at any point.
    pub fn get(&self) -> Option<f64> {
        if self.elapsed > 0 {
            Some(self.weighted_sum / self.elapsed as f64)
        } else {
            None
        }
    }

    /// Total time over which prices have been observed
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}
