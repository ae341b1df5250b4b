//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally through a `.env` file) or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream Uphold API configuration.
    pub uphold: UpholdConfig,
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

/// Configuration for the Uphold API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpholdConfig {
    /// Root address of the API, e.g. `https://api.uphold.com/v0`.
    /// Required: the server refuses to start without it.
    pub base_url: Option<String>,

    /// `User-Agent` header sent with every request.
    pub user_agent: Option<String>,
}

impl Default for UpholdConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: Some(concat!("uphold-mcp-server/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load the logging section alone from `MCP_LOG_LEVEL`.
    ///
    /// Needed before the subscriber exists, so it logs nothing itself.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "uphold-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            uphold: UpholdConfig::default(),
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
    /// Reads `UPHOLD_API_BASE_URL`, `UPHOLD_USER_AGENT`, `MCP_SERVER_NAME`
    /// and `MCP_LOG_LEVEL`. A `.env` file in the working directory is loaded
    /// first when present.
    ///
    /// Emits log lines, so call it after the subscriber is installed
    /// (see [`LoggingConfig::from_env`]).
    pub fn from_env() -> Self {
        let mut config = Self {
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        match std::env::var("UPHOLD_API_BASE_URL") {
            Ok(base_url) => {
                info!("Uphold API base URL loaded from environment");
                config.uphold.base_url = Some(base_url);
            }
            Err(_) => warn!("UPHOLD_API_BASE_URL not set"),
        }

        if let Ok(user_agent) = std::env::var("UPHOLD_USER_AGENT") {
            config.uphold.user_agent = Some(user_agent);
        }

        config
    }
}
