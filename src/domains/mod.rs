//! Domains module containing business logic organized by bounded contexts.
//!
//! - **uphold**: the upstream API client
//! - **tools**: MCP tools exposing that client to hosts

pub mod tools;
pub mod uphold;
