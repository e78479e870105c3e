//! Tests for configuration validation

use checkout_lanes::config::{ReportFormat, SimulationConfig};

#[test]
fn test_simulation_config_validation() {
    let valid = SimulationConfig::new(4, 25);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_config_invalid_capacity() {
    assert!(SimulationConfig::new(0, 5).validate().is_err());
    assert!(SimulationConfig::new(11, 5).validate().is_err());
    assert!(SimulationConfig::new(10, 5).validate().is_ok());
    assert!(SimulationConfig::new(1, 5).validate().is_ok());
}

#[test]
fn test_config_invalid_time_unit() {
    let invalid = SimulationConfig {
        time_unit_ms: 0,
        ..SimulationConfig::new(2, 5)
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_service_range() {
    let invalid = SimulationConfig {
        service_min_units: 11,
        service_max_units: 10,
        ..SimulationConfig::new(2, 5)
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_zero_customers_is_valid() {
    assert!(SimulationConfig::new(3, 0).validate().is_ok());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "initial_capacity": 3,
        "customer_count": 12,
        "arrival_interval_units": 1,
        "time_unit_ms": 50,
        "report_format": "json"
    }"#;

    let config = SimulationConfig::from_json_str(json).unwrap();
    assert_eq!(config.initial_capacity, 3);
    assert_eq!(config.customer_count, 12);
    assert_eq!(config.arrival_interval_units, 1);
    assert_eq!(config.time_unit_ms, 50);
    assert_eq!(config.report_format, ReportFormat::Json);
    assert_eq!(config.service_min_units, 6);
    assert_eq!(config.dissatisfaction_threshold_units, 20);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(SimulationConfig::from_json_str(r#"{ "initial_capacity": 12 }"#).is_err());
    assert!(SimulationConfig::from_json_str("not json").is_err());
}
