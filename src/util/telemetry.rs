//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize tracing. Callers may install their own subscriber; this helper
/// only installs a fmt subscriber (filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]) if none is set yet.
///
/// The fmt layer writes each event as one line, so output from concurrent
/// customers never interleaves mid-line.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
