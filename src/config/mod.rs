//! Configuration module for the to-do backend.
//!
//! All configuration is loaded from environment variables. The defaults are the
//! fixed values the application has always used: port 3000 and `data.json` in
//! the working directory.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default location of the JSON document.
pub const DEFAULT_DATA_PATH: &str = "./data.json";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON document holding users and their to-do lists
    pub data_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit log lines as JSON instead of the human-readable format
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("TODO_DATA_PATH")
            .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string())
            .into();

        let raw_addr = env::var("TODO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let log_level = env::var("TODO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("TODO_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            data_path,
            bind_addr,
            log_level,
            log_json,
        })
    }
}

/// Configuration that could not be parsed.
#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(addr) => {
                write!(f, "Invalid TODO_BIND_ADDR format: {}", addr)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share one test so they never race on the process environment.
    #[test]
    fn test_config_from_env() {
        env::remove_var("TODO_DATA_PATH");
        env::remove_var("TODO_BIND_ADDR");
        env::remove_var("TODO_LOG_LEVEL");
        env::remove_var("TODO_LOG_FORMAT");

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_path, PathBuf::from("./data.json"));
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);

        env::set_var("TODO_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
        env::remove_var("TODO_BIND_ADDR");
    }
}
