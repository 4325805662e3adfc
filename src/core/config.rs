//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos reads its own `LEPTOS_*` variables separately.

use std::net::SocketAddr;

use thiserror::Error;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a valid boolean: {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listen address overriding `site-addr` from Cargo.toml
    /// Example: 0.0.0.0:8080
    pub site_addr: Option<SocketAddr>,

    /// Whether responses are brotli/gzip compressed
    pub compression: bool,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_addr: None,
            compression: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let site_addr = match non_empty(lookup("SITE_ADDR")) {
            Some(value) => Some(value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: "SITE_ADDR",
                value,
            })?),
            None => None,
        };

        let compression = match non_empty(lookup("SITE_COMPRESSION")) {
            Some(value) => parse_bool("SITE_COMPRESSION", value)?,
            None => defaults.compression,
        };

        let log_filter = non_empty(lookup("RUST_LOG")).unwrap_or(defaults.log_filter);

        Ok(Self {
            site_addr,
            compression,
            log_filter,
        })
    }

    /// Check if the listen address is overridden
    pub fn has_site_addr(&self) -> bool {
        self.site_addr.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Config Parsing Tests (no env var dependencies - thread safe)
    // ========================================================================

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_with_no_vars_uses_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(!config.has_site_addr());
        assert!(config.compression);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = Config::from_vars(vars(&[
            ("SITE_ADDR", "0.0.0.0:8080"),
            ("SITE_COMPRESSION", "off"),
            ("RUST_LOG", "alborvia=debug,tower_http=warn"),
        ]))
        .unwrap();

        assert_eq!(config.site_addr, Some("0.0.0.0:8080".parse().unwrap()));
        assert!(config.has_site_addr());
        assert!(!config.compression);
        assert_eq!(config.log_filter, "alborvia=debug,tower_http=warn");
    }

    #[test]
    fn test_config_bool_spellings() {
        for (raw, expected) in [
            ("1", true),
            ("TRUE", true),
            ("yes", true),
            ("On", true),
            ("0", false),
            ("false", false),
            ("NO", false),
            ("off", false),
        ] {
            let config = Config::from_vars(vars(&[("SITE_COMPRESSION", raw)])).unwrap();
            assert_eq!(config.compression, expected, "{raw}");
        }
    }

    #[test]
    fn test_config_invalid_bool() {
        let err = Config::from_vars(vars(&[("SITE_COMPRESSION", "maybe")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: "SITE_COMPRESSION",
                value: "maybe".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "SITE_COMPRESSION is not a valid boolean: \"maybe\""
        );
    }

    #[test]
    fn test_config_invalid_addr() {
        let err = Config::from_vars(vars(&[("SITE_ADDR", "localhost")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidAddr { var: "SITE_ADDR", .. }));
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_config_empty_strings_are_unset() {
        let config = Config::from_vars(vars(&[
            ("SITE_ADDR", ""),
            ("SITE_COMPRESSION", "  "),
            ("RUST_LOG", ""),
        ]))
        .unwrap();

        assert_eq!(config, Config::default());
    }
}
