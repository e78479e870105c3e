//! Final statistics report.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StatsSnapshot;

/// Summary produced once every customer has been served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Number of customers served.
    pub served: usize,
    /// Customers whose wait exceeded the threshold.
    pub dissatisfied: u64,
    /// Threshold used for `dissatisfied`, in units.
    pub dissatisfaction_threshold_units: u64,
    /// Wait times in completion order.
    pub waits: Vec<u64>,
    /// Arithmetic mean of `waits`; `None` when nobody was served.
    pub mean_wait: Option<f64>,
}

impl Report {
    /// Build the report from a finished collector snapshot.
    pub fn from_snapshot(snapshot: StatsSnapshot, dissatisfaction_threshold_units: u64) -> Self {
        let served = snapshot.waits.len();
        let mean_wait = if served == 0 {
            None
        } else {
            let total: u64 = snapshot.waits.iter().sum();
            #[allow(clippy::cast_precision_loss)]
            let mean = total as f64 / served as f64;
            Some(mean)
        };

        Self {
            served,
            dissatisfied: snapshot.dissatisfied,
            dissatisfaction_threshold_units,
            waits: snapshot.waits,
            mean_wait,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Report:")?;
        writeln!(f, "Total customers served: {}", self.served)?;
        writeln!(
            f,
            "Dissatisfied customers (wait > {} seconds): {}",
            self.dissatisfaction_threshold_units, self.dissatisfied
        )?;
        writeln!(f, "Customer wait times:")?;
        for (index, wait) in self.waits.iter().enumerate() {
            writeln!(f, "Customer {index}: {wait} seconds")?;
        }
        writeln!(f)?;
        match self.mean_wait {
            Some(mean) => write!(f, "Average wait time: {mean:.2} seconds"),
            None => write!(f, "No customers were served; average wait time is undefined."),
        }
    }
}
