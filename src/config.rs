//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::feed::DEFAULT_LINE_LIFETIME_MS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime in milliseconds of each line posted to the board
    pub line_lifetime_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LINE_LIFETIME_MS` - Lifetime of posted lines (default: 10000)
    pub fn from_env() -> Self {
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(3000),
            line_lifetime_ms: parse_var("LINE_LIFETIME_MS").unwrap_or(DEFAULT_LINE_LIFETIME_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            line_lifetime_ms: DEFAULT_LINE_LIFETIME_MS,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
