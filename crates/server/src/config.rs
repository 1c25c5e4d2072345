//! Server configuration.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! environment variables (`HOST`, `PORT`, `DATA_FILE`, `LOG_FORMAT`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Errors raised while assembling [`ServerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Portfolio sheet (`.xlsx` workbook or CSV export) loaded at start-up
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    "data/portfolio.xlsx".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Full resolution: `.env`, optional TOML file, then process environment.
    ///
    /// `config_path` wins over `CONFIG_FILE`.
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();

        let base = match config_path.or_else(|| std::env::var(CONFIG_FILE_ENV).ok()) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name.
    /// Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.host = host;
        }
        if let Some(port) = get("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(data_file) = get("DATA_FILE") {
            self.data_file = data_file;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.log_format = match format.trim().to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT",
                        value: format,
                    })
                }
            };
        }
        Ok(self)
    }

    /// Socket address to bind. An unparseable host falls back to all interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.port)
    }
}
