//! Unit tests for service configuration

use std::time::Duration;

use stock_hunter::config::{is_production, ServiceConfig, DEFAULT_PORT, DEFAULT_YAHOO_BASE_URL};

#[test]
fn test_service_config_default() {
    let config = ServiceConfig::default();
    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.yahoo_base_url, DEFAULT_YAHOO_BASE_URL);
    assert_eq!(config.yahoo_timeout, Duration::from_secs(10));
    assert!(!config.is_production());
}

#[test]
fn test_production_environment_names() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
    assert!(!is_production("staging"));
}
