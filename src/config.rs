//! Configuration Module
//!
//! Loads server configuration from environment variables.

use std::env;

const DEFAULT_CAPACITY: usize = 1000;
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Missing or unparseable values fall back to the defaults. A capacity
    /// of zero parses fine here and is rejected when the cache is built.
    pub fn from_env() -> Self {
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(DEFAULT_CAPACITY),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.server_port, 3000);
    }

    // Both env cases live in one test so parallel tests never race on
    // the same variables.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("CACHE_CAPACITY", "42");
        env::set_var("SERVER_PORT", "not-a-port");
        let config = Config::from_env();
        assert_eq!(config.capacity, 42);
        assert_eq!(config.server_port, 3000);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
    }
}
