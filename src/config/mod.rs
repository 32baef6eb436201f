//! Configuration module for the roster backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (required in production)
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Base URL of the remote document store; unset means cloud sync is unavailable
    pub remote_url: Option<String>,
    /// Built-in master account credentials; unset disables master login
    pub master_user: Option<String>,
    pub master_password: Option<String>,
    /// Quiet period before a debounced push fires
    pub push_quiet_period: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_psk = env::var("QUADRO_API_PSK").ok();

        let db_path = env::var("QUADRO_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("QUADRO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid QUADRO_BIND_ADDR format");

        let log_level = env::var("QUADRO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let remote_url = env::var("QUADRO_REMOTE_URL").ok();
        let master_user = env::var("QUADRO_MASTER_USER").ok();
        let master_password = env::var("QUADRO_MASTER_PASSWORD").ok();

        let push_quiet_period = env::var("QUADRO_PUSH_QUIET_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(2000));

        Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            remote_url,
            master_user,
            master_password,
            push_quiet_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("QUADRO_API_PSK");
        env::remove_var("QUADRO_DB_PATH");
        env::remove_var("QUADRO_BIND_ADDR");
        env::remove_var("QUADRO_LOG_LEVEL");
        env::remove_var("QUADRO_REMOTE_URL");
        env::remove_var("QUADRO_MASTER_USER");
        env::remove_var("QUADRO_MASTER_PASSWORD");
        env::remove_var("QUADRO_PUSH_QUIET_MS");

        let config = Config::from_env();

        assert!(config.api_psk.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/app.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.remote_url.is_none());
        assert_eq!(config.push_quiet_period, Duration::from_millis(2000));
    }
}
