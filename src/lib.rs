//! Uphold MCP Server Library
//!
//! Exposes Uphold's public, read-only REST API (tickers, assets, countries)
//! as Model Context Protocol (MCP) tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **uphold**: HTTP and typed clients for the upstream API
//!   - **tools**: MCP tools backed by the Uphold client
//!
//! # Example
//!
//! ```rust,no_run
//! use uphold_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
