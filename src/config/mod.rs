//! Run configuration models and validation.

pub mod simulation;

pub use simulation::{ReportFormat, SimulationConfig};
