//! Thread-safe accumulator of customer wait times.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Final contents of a [`StatsCollector`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Wait times in whole units, in completion order.
    pub waits: Vec<u64>,
    /// Customers whose wait exceeded the threshold.
    pub dissatisfied: u64,
}

/// Collects wait times and the dissatisfaction count from concurrent customers.
///
/// Both fields share one lock so a snapshot is always internally consistent.
#[derive(Debug, Default)]
pub struct StatsCollector {
    inner: Mutex<StatsSnapshot>,
}

impl StatsCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one wait time.
    pub fn record(&self, wait_units: u64) {
        self.inner.lock().waits.push(wait_units);
    }

    /// Count one more dissatisfied customer.
    pub fn mark_dissatisfied(&self) {
        self.inner.lock().dissatisfied += 1;
    }

    /// Copy out everything recorded so far.
    ///
    /// Meant to be called once all customers have been joined.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.inner.lock().clone()
    }
}
