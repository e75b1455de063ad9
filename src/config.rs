//! Environment-driven service configuration

use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_YAHOO_TIMEOUT_SECONDS: u64 = 10;

/// Deployment environment name, `sandbox` unless `ENVIRONMENT` says otherwise.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .ok()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_yahoo_base_url() -> String {
    env::var("YAHOO_BASE_URL")
        .ok()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_YAHOO_BASE_URL.to_string())
}

pub fn get_yahoo_timeout() -> Duration {
    let seconds = env::var("YAHOO_TIMEOUT_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|s: &u64| *s > 0)
        .unwrap_or(DEFAULT_YAHOO_TIMEOUT_SECONDS);
    Duration::from_secs(seconds)
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub environment: String,
    pub port: u16,
    pub yahoo_base_url: String,
    pub yahoo_timeout: Duration,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            environment: get_environment(),
            port: get_port(),
            yahoo_base_url: get_yahoo_base_url(),
            yahoo_timeout: get_yahoo_timeout(),
        }
    }

    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            yahoo_timeout: Duration::from_secs(DEFAULT_YAHOO_TIMEOUT_SECONDS),
        }
    }
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}
