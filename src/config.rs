//! Environment-derived configuration.
//!
//! Credentials are read exactly once at startup and injected into the client
//! constructor. Absence of a provider's credential is not an error; it
//! silently puts that provider into demo mode. Tests construct configs
//! directly and never touch the process environment.

use std::time::Duration;

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SEARCH_DEADLINE_SECS: u64 = 25;

/// One credential set per provider plus the shared timing knobs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub court_api_key: Option<String>,
    pub property_api_key: Option<String>,
    pub business_api_key: Option<String>,
    pub government_api_key: Option<String>,
    pub background_api_key: Option<String>,
    pub vehicle_api_key: Option<String>,
    /// Bounded timeout applied to every upstream HTTP call.
    pub upstream_timeout: Duration,
    /// Per-category deadline enforced by the dispatcher; work still pending
    /// when it elapses is recorded as a `timeout` failure.
    pub search_deadline: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            court_api_key: None,
            property_api_key: None,
            business_api_key: None,
            government_api_key: None,
            background_api_key: None,
            vehicle_api_key: None,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            search_deadline: Duration::from_secs(DEFAULT_SEARCH_DEADLINE_SECS),
        }
    }
}

impl ClientConfig {
    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self {
            court_api_key: env_opt("UNICOURT_API_KEY"),
            property_api_key: env_opt("PROPMIX_API_KEY"),
            business_api_key: env_opt("BUSINESS_API_KEY"),
            government_api_key: env_opt("DATA_GOV_API_KEY"),
            background_api_key: env_opt("CHECKR_API_KEY"),
            vehicle_api_key: env_opt("VINDATA_API_KEY"),
            upstream_timeout: env_secs("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
            search_deadline: env_secs("SEARCH_DEADLINE_SECS", DEFAULT_SEARCH_DEADLINE_SECS),
        }
    }

    /// Every provider in demo mode; used by tests and local development.
    pub fn unconfigured() -> Self {
        Self::default()
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_secs(name: &str, default: u64) -> Duration {
    let secs = std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_has_no_credentials() {
        let config = ClientConfig::unconfigured();
        assert!(config.court_api_key.is_none());
        assert!(config.vehicle_api_key.is_none());
        assert_eq!(
            config.upstream_timeout,
            Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS)
        );
        assert_eq!(
            config.search_deadline,
            Duration::from_secs(DEFAULT_SEARCH_DEADLINE_SECS)
        );
    }

    #[test]
    fn configs_are_independent_values() {
        let mut live = ClientConfig::unconfigured();
        live.court_api_key = Some("key-1".to_string());
        let demo = ClientConfig::unconfigured();
        assert!(live.court_api_key.is_some());
        assert!(demo.court_api_key.is_none());
    }
}
