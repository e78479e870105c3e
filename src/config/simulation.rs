//! Simulation run configuration.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{MAX_SERVERS, MIN_SERVERS};

/// How the final report is written to the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable text lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format `{other}`")),
        }
    }
}

/// Parameters of one simulation run.
///
/// All durations are expressed in simulated time units; `time_unit_ms` maps one
/// unit onto wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Counters open when the run starts.
    pub initial_capacity: u32,
    /// Number of customers that will arrive.
    pub customer_count: u32,
    /// Units between consecutive arrivals.
    pub arrival_interval_units: u64,
    /// Shortest service duration, inclusive.
    pub service_min_units: u64,
    /// Longest service duration, inclusive.
    pub service_max_units: u64,
    /// Waits strictly above this many units make a customer dissatisfied.
    pub dissatisfaction_threshold_units: u64,
    /// Wall-clock length of one unit in milliseconds.
    pub time_unit_ms: u64,
    /// Console report format.
    pub report_format: ReportFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_capacity: MIN_SERVERS,
            customer_count: 0,
            arrival_interval_units: 2,
            service_min_units: 6,
            service_max_units: 10,
            dissatisfaction_threshold_units: 20,
            time_unit_ms: 1000,
            report_format: ReportFormat::Text,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with the two interactive inputs filled in.
    pub fn new(initial_capacity: u32, customer_count: u32) -> Self {
        Self {
            initial_capacity,
            customer_count,
            ..Self::default()
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_SERVERS..=MAX_SERVERS).contains(&self.initial_capacity) {
            return Err(format!(
                "initial_capacity must be between {MIN_SERVERS} and {MAX_SERVERS}, got {}",
                self.initial_capacity
            ));
        }
        if self.time_unit_ms == 0 {
            return Err("time_unit_ms must be greater than 0".into());
        }
        if self.service_min_units > self.service_max_units {
            return Err(format!(
                "service_min_units ({}) must not exceed service_max_units ({})",
                self.service_min_units, self.service_max_units
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from `CHECKOUT_*` environment variables, loading a
    /// `.env` file first when present. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        let mut cfg = Self::default();
        env_override("CHECKOUT_INITIAL_CAPACITY", &mut cfg.initial_capacity)?;
        env_override("CHECKOUT_CUSTOMER_COUNT", &mut cfg.customer_count)?;
        env_override("CHECKOUT_ARRIVAL_INTERVAL_UNITS", &mut cfg.arrival_interval_units)?;
        env_override("CHECKOUT_SERVICE_MIN_UNITS", &mut cfg.service_min_units)?;
        env_override("CHECKOUT_SERVICE_MAX_UNITS", &mut cfg.service_max_units)?;
        env_override(
            "CHECKOUT_DISSATISFACTION_THRESHOLD_UNITS",
            &mut cfg.dissatisfaction_threshold_units,
        )?;
        env_override("CHECKOUT_TIME_UNIT_MS", &mut cfg.time_unit_ms)?;
        env_override("CHECKOUT_REPORT_FORMAT", &mut cfg.report_format)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Wall-clock duration of one simulated unit.
    pub const fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }
}

fn env_override<T>(name: &str, slot: &mut T) -> Result<(), String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(raw) = std::env::var(name) {
        *slot = raw
            .trim()
            .parse()
            .map_err(|e| format!("{name}: cannot parse `{raw}`: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_checkout_floor() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.initial_capacity, 1);
        assert_eq!(cfg.service_min_units, 6);
        assert_eq!(cfg.service_max_units, 10);
        assert_eq!(cfg.dissatisfaction_threshold_units, 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_time_unit_from_millis() {
        let cfg = SimulationConfig {
            time_unit_ms: 250,
            ..SimulationConfig::default()
        };
        assert_eq!(cfg.time_unit(), Duration::from_millis(250));
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!(" text ".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
