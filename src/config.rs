//! Configuration Module
//!
//! Loads server configuration from environment variables.
//! The item cache TTL is fixed and deliberately not part of it.

use std::env;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    ///
    /// Unset or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 1);
    }

    // Single test touching the environment so parallel tests cannot race on it
    #[test]
    fn test_config_from_env() {
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");
        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 1);

        env::set_var("SERVER_PORT", "8080");
        env::set_var("CLEANUP_INTERVAL", "0");
        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cleanup_interval, 1, "Zero interval falls back to default");

        env::set_var("SERVER_PORT", "not-a-port");
        env::set_var("CLEANUP_INTERVAL", "5");
        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 5);

        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");
    }
}
