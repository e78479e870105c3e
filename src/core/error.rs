//! Error types for simulation operations.

use thiserror::Error;

/// Errors produced by simulation components.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Run configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The capacity controller is no longer accepting commands.
    #[error("capacity controller closed")]
    ControllerClosed,
    /// A spawned task ended abnormally.
    #[error("task failed: {0}")]
    TaskFailed(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
