//! Configuration management for the COP server.
//!
//! Configuration is populated from environment variables (prefixed with
//! `COP_`) on top of defaults; a `.env` file is honored via dotenvy.

use serde::{Deserialize, Serialize};

use super::transport::HttpConfig;

/// Main configuration structure for the COP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "cop-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// For example: `COP_SERVER_NAME`, `COP_LOG_LEVEL`, `COP_HTTP_PORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("COP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("COP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.http = HttpConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "cop-server");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("COP_SERVER_NAME", "cop-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "cop-test");
        unsafe {
            std::env::remove_var("COP_SERVER_NAME");
        }
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("COP_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "debug");
        unsafe {
            std::env::remove_var("COP_LOG_LEVEL");
        }
    }
}
