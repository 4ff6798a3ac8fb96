//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Release mode quiets the default log filter
    pub release_mode: bool,
    /// Whether to register the readiness probe endpoint
    pub enable_readiness: bool,
    /// Optional directory to serve under /static
    pub static_dir: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `APP_MODE` - `release` for release mode (default: development)
    /// - `ENABLE_READINESS` - register `GET /ready` when truthy (default: off)
    /// - `STATIC_DIR` - serve this directory under `/static` when set
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            release_mode: env::var("APP_MODE")
                .map(|v| v.eq_ignore_ascii_case("release"))
                .unwrap_or(false),
            enable_readiness: env::var("ENABLE_READINESS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            static_dir: env::var("STATIC_DIR").ok().filter(|v| !v.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            release_mode: false,
            enable_readiness: false,
            static_dir: None,
        }
    }
}
