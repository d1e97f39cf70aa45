//! Configuration management for the contact book.
//!
//! Values come from environment variables, with a `.env` file loaded first if
//! one is present. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Which presentation adapter the binary serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// REST API over HTTP
    Http,
    /// MCP over stdin/stdout
    Stdio,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "stdio" | "mcp" => Ok(Self::Stdio),
            other => Err(format!("Must be 'http' or 'stdio', got: {}", other)),
        }
    }
}

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON contacts file (default: "contacts.json")
    pub contacts_file: PathBuf,

    /// Adapter to serve (default: HTTP)
    pub transport: Transport,

    /// Address the HTTP adapter listens on (default: 127.0.0.1:8000)
    pub http_bind: SocketAddr,

    /// Optional file that receives a copy of every log line
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: contacts file path (default: contacts.json)
    /// - `CONTACT_BOOK_TRANSPORT`: `http` or `stdio` (default: http)
    /// - `CONTACT_BOOK_HTTP_BIND`: listen address (default: 127.0.0.1:8000)
    /// - `CONTACT_BOOK_LOG_FILE`: also append logs to this file
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy::dotenv() does not print to stdout.
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let contacts_file = Self::parse_env_path("CONTACT_BOOK_FILE")?
            .unwrap_or(defaults.contacts_file);
        let transport = Self::parse_env("CONTACT_BOOK_TRANSPORT", defaults.transport)?;
        let http_bind = Self::parse_env("CONTACT_BOOK_HTTP_BIND", defaults.http_bind)?;
        let log_file = Self::parse_env_path("CONTACT_BOOK_LOG_FILE")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            contacts_file,
            transport,
            http_bind,
            log_file,
            log_level,
        })
    }

    /// Parse an environment variable with `FromStr`, falling back to `default`.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("{} (got: {})", e, val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Read an optional path variable, rejecting blank values.
    fn parse_env_path(var_name: &str) -> ConfigResult<Option<PathBuf>> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(Some(PathBuf::from(val.trim()))),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from("contacts.json"),
            transport: Transport::Http,
            http_bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}
