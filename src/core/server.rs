//! MCP Server implementation and lifecycle management.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`, grouped by upstream
//! resource. Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` method (registration on the router)
//!
//! The ToolRouter is built in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::{tools::build_tool_router, uphold::UpholdClient};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes tool
/// calls to the Uphold tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the Uphold client cannot be built, e.g. without a base URL.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let client = Arc::new(UpholdClient::new(&config.uphold)?);
        Ok(Self::with_client(config, client))
    }

    /// Create a server around an existing Uphold client.
    pub fn with_client(config: Config, client: Arc<UpholdClient>) -> Self {
        let tool_router = build_tool_router::<Self>(client);
        info!("Registered {} tools", tool_router.list_all().len());

        Self {
            config: Arc::new(config),
            tool_router,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List the tools this server exposes.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only access to Uphold's public market data: exchange rate tickers, \
                 supported assets and supported countries."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UpholdConfig;
    use crate::core::error::Error;
    use crate::domains::tools::ToolRegistry;

    fn test_config(base_url: Option<&str>) -> Config {
        let mut config = Config::default();
        config.uphold = UpholdConfig {
            base_url: base_url.map(str::to_string),
            ..UpholdConfig::default()
        };
        config
    }

    #[test]
    fn test_new_requires_base_url() {
        let result = McpServer::new(test_config(None));
        assert!(matches!(result, Err(Error::Uphold(_))));
    }

    #[test]
    fn test_new_registers_tools() {
        let server = McpServer::new(test_config(Some("https://api.uphold.com/v0"))).unwrap();
        assert_eq!(server.name(), "uphold-mcp-server");
        assert_eq!(server.list_tools().len(), ToolRegistry::tool_names().len());
    }

    #[test]
    fn test_get_info_enables_tools() {
        let server = McpServer::new(test_config(Some("https://api.uphold.com/v0"))).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }
}
