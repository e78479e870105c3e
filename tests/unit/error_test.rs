//! Tests for error types

use checkout_lanes::core::SimulationError;

#[test]
fn test_invalid_config_error() {
    let err = SimulationError::InvalidConfig("initial_capacity out of range".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: initial_capacity out of range"
    );
}

#[test]
fn test_controller_closed_error() {
    let err = SimulationError::ControllerClosed;
    assert_eq!(format!("{}", err), "capacity controller closed");
}

#[test]
fn test_task_failed_error() {
    let err = SimulationError::TaskFailed("panicked".to_string());
    assert_eq!(format!("{}", err), "task failed: panicked");
}

#[test]
fn test_converts_into_anyhow() {
    let err: anyhow::Error = SimulationError::ControllerClosed.into();
    assert!(err.downcast_ref::<SimulationError>().is_some());
}
