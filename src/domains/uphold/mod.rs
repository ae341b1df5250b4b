//! Uphold domain module.
//!
//! Read-only access to Uphold's public REST API: tickers, assets and
//! countries. No authentication is involved.
//!
//! ## Architecture
//!
//! - `http.rs` - GET-only HTTP client with uniform error translation
//! - `client.rs` - One method per upstream endpoint
//! - `error.rs` - Uphold-specific error types

mod client;
mod error;
pub mod http;

pub use client::{UpholdClient, encode_segment};
pub use error::{UpholdError, UpholdResult};
pub use http::{HttpClient, HttpClientConfig};
