//! Uphold API error types.

use thiserror::Error;

/// A specialized Result type for Uphold API operations.
pub type UpholdResult<T> = Result<T, UpholdError>;

/// Errors that can occur while talking to the Uphold API.
#[derive(Debug, Error)]
pub enum UpholdError {
    /// The API answered with a non-success HTTP status.
    #[error("{message}")]
    Api {
        message: String,
        status_code: u16,
        endpoint: String,
    },

    /// Any other failure: network, body decoding, serialization.
    #[error("{0}")]
    Unexpected(String),

    /// The client could not be built from the given configuration.
    #[error("{0}")]
    Config(String),
}

impl UpholdError {
    /// Create an API error from a failed response.
    pub fn api(status_code: u16, status_text: &str, body: &str, endpoint: impl Into<String>) -> Self {
        Self::Api {
            message: format!("API error: {} {} - {}", status_code, status_text, body),
            status_code,
            endpoint: endpoint.into(),
        }
    }

    /// Create an unexpected error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Render an error followed by each of its causes, joined by `": "`.
///
/// A cause whose text is already part of the message is skipped.
fn with_sources(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for UpholdError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unexpected(with_sources(&err))
    }
}

impl From<serde_json::Error> for UpholdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(with_sources(&err))
    }
}
