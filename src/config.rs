//! Runtime configuration read from the environment.
//!
//! Values come from the process environment, a `.env` file on desktop, or the
//! bundled `assets/config.env` (see `main.rs`).

use std::env;
use std::time::Duration;

pub const API_BASE_ENV: &str = "S1M0N_API_BASE";
pub const REQUEST_TIMEOUT_ENV: &str = "S1M0N_REQUEST_TIMEOUT_SECS";

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{API_BASE_ENV} must be an http(s) URL, got {0:?}")]
    InvalidApiBase(String),
    #[error("{REQUEST_TIMEOUT_ENV} must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend origin without a trailing slash.
    pub api_base: String,
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(API_BASE_ENV)) {
            if !(raw.starts_with("http://") || raw.starts_with("https://")) {
                return Err(ConfigError::InvalidApiBase(raw));
            }
            config.api_base = raw.trim_end_matches('/').to_string();
        }

        if let Some(raw) = non_blank(lookup(REQUEST_TIMEOUT_ENV)) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let config =
            DashboardConfig::from_lookup(lookup(&[(API_BASE_ENV, "https://s1m0n.local/")]))
                .unwrap();
        assert_eq!(config.api_base, "https://s1m0n.local");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            DashboardConfig::from_lookup(lookup(&[(API_BASE_ENV, "ftp://x")])),
            Err(ConfigError::InvalidApiBase("ftp://x".into()))
        );
        assert_eq!(
            DashboardConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_ENV, "0")])),
            Err(ConfigError::InvalidTimeout("0".into()))
        );
    }

    #[test]
    fn test_timeout_is_read_in_seconds() {
        let config =
            DashboardConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_ENV, "30")])).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
