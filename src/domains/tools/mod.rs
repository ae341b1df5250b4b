//! Tools domain module.
//!
//! Tools are the functions MCP clients call. Each one maps to a single Uphold
//! endpoint and returns the response as pretty-printed JSON text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `router.rs` - ToolRouter builder used by the server
//! - `registry.rs` - Static list of tool names and metadata
//!
//! ## Adding a New Tool
//!
//! 1. Add the tool to a file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` using `with_route()`
//! 4. List it in `registry.rs`

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
