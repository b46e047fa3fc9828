//! # Configuration
//!
//! Layered service settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. Optional config file (`config/quote-leads.{toml,yaml,json}` or an
//!    explicit path)
//! 3. `QUOTE_LEADS__*` environment variables, `__` separating sections
//!    (e.g. `QUOTE_LEADS__SERVER__PORT=8080`)
//! 4. The conventional `PORT` and `DATABASE_URL` variables
//!
//! # Examples
//!
//! ```
//! use quote_leads::infrastructure::config::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.server.port, 5000);
//! assert!(settings.database.url.is_none());
//! ```

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Default config file stem, resolved relative to the working directory.
const DEFAULT_CONFIG_FILE: &str = "config/quote-leads";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "QUOTE_LEADS";

/// Default HTTP port.
const DEFAULT_PORT: u16 = 5000;

/// Default seconds between database connection attempts.
const DEFAULT_CONNECT_RETRY_SECS: u64 = 5;

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default seconds to wait for a pooled connection.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Default request body limit in bytes.
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Lead store settings.
    pub database: DatabaseSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Maximum accepted request body in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerSettings {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` if host and port do not form a
    /// valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid server address: {e}")))
    }
}

/// Lead store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// PostgreSQL URL. When unset, leads are kept in memory.
    pub url: Option<String>,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing a write.
    pub acquire_timeout_secs: u64,
    /// Seconds between connection attempts at startup.
    pub connect_retry_secs: u64,
    /// Connection attempts before giving up; 0 retries forever.
    pub connect_max_attempts: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
            connect_retry_secs: DEFAULT_CONNECT_RETRY_SECS,
            connect_max_attempts: 0,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Multi-line human readable output.
    Pretty,
    /// Single-line human readable output.
    #[default]
    Compact,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Loads settings from all sources.
    ///
    /// `config_path` replaces the default config file location; an
    /// explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or the merged
    /// values do not deserialize.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }

    /// Returns true if leads should be stored in PostgreSQL.
    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.database
            .url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}
