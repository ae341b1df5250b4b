//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the server and serves it
//! over stdio. Any startup failure is logged and ends the process with a
//! non-zero exit status.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use uphold_mcp_server::core::{Config, LoggingConfig, McpServer, StdioTransport};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error starting Uphold MCP Server: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logging first, so configuration loading is logged too
    init_logging(&LoggingConfig::from_env().level);

    // Load configuration from environment
    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Create the MCP server
    let server = McpServer::new(config)?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: stdout carries the MCP protocol stream.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
