//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for process-level failures:
//! building the server, connecting the transport, loading configuration.
//! Per-call failures never reach it; tools turn them into error results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Uphold API client.
    #[error("Uphold error: {0}")]
    Uphold(#[from] crate::domains::uphold::UpholdError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
