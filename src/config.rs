//! Service configuration from environment variables

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (env: HOST, default 0.0.0.0)
    pub host: IpAddr,
    /// Bind port (env: PORT, default 3000)
    pub port: u16,
    /// Booking collection file (env: BOOKINGS_PATH). Memory-only when unset.
    pub bookings_path: Option<PathBuf>,
    /// Catalog JSON file (env: CATALOG_PATH). Built-in catalog when unset.
    pub catalog_path: Option<PathBuf>,
    /// Allow cross-origin requests from any origin (env: CORS_ALLOW_ANY)
    pub cors_allow_any: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            bookings_path: None,
            catalog_path: None,
            cors_allow_any: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = match var("HOST") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { name: "HOST", value: v })?,
            None => defaults.host,
        };
        let port = match var("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { name: "PORT", value: v })?,
            None => defaults.port,
        };
        let cors_allow_any = match var("CORS_ALLOW_ANY") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                name: "CORS_ALLOW_ANY",
                value: v,
            })?,
            None => defaults.cors_allow_any,
        };

        Ok(Self {
            host,
            port,
            bookings_path: var("BOOKINGS_PATH").map(PathBuf::from),
            catalog_path: var("CATALOG_PATH").map(PathBuf::from),
            cors_allow_any,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert!(config.bookings_path.is_none());
        assert!(config.catalog_path.is_none());
        assert!(!config.cors_allow_any);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("BOOKINGS_PATH", "data/bookings.json"),
            ("CORS_ALLOW_ANY", "yes"),
            ("CATALOG_PATH", "  "),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.bookings_path, Some(PathBuf::from("data/bookings.json")));
        assert!(config.catalog_path.is_none());
        assert!(config.cors_allow_any);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("CORS_ALLOW_ANY", "maybe")]),
            Err(ConfigError::Invalid { name: "CORS_ALLOW_ANY", .. })
        ));
    }
}
