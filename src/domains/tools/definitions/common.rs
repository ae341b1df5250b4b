//! Common utilities shared across the Uphold tools.
//!
//! Every tool answers with exactly one text segment: the pretty-printed JSON
//! on success, or a one-line message flagged as an error.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domains::uphold::{UpholdError, UpholdResult};

/// Parameters for tools that take no input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Decode tool call arguments into a parameter struct.
///
/// Missing arguments are treated as an empty object.
pub fn parse_params<P: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<P, McpError> {
    let args = arguments.unwrap_or_default();
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create an error result describing a failed fetch of `subject`.
pub fn failure_result(subject: &str, err: &UpholdError) -> CallToolResult {
    let message = match err {
        UpholdError::Api { message, .. } => format!("Failed to fetch {}: {}", subject, message),
        other => format!("Unexpected error: {}", other),
    };
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Turn the outcome of an Uphold call into a tool result.
///
/// Values are rendered with two-space indentation.
pub fn tool_result<T: Serialize>(subject: &str, outcome: UpholdResult<T>) -> CallToolResult {
    let rendered = outcome.and_then(|value| Ok(serde_json::to_string_pretty(&value)?));

    match rendered {
        Ok(text) => success_result(text),
        Err(e) => failure_result(subject, &e),
    }
}

/// Extract the text of the single content segment of a result.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "Expected exactly one content segment");
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_result_success_pretty_prints() {
        let value = json!([{ "code": "BTC", "name": "Bitcoin" }]);
        let result = tool_result("assets", Ok(value));

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            result_text(&result),
            "[\n  {\n    \"code\": \"BTC\",\n    \"name\": \"Bitcoin\"\n  }\n]"
        );
    }

    #[test]
    fn test_tool_result_empty_array() {
        let result = tool_result::<Vec<String>>("assets", Ok(vec![]));
        assert_eq!(result_text(&result), "[]");
    }

    #[test]
    fn test_failure_result_api_error() {
        let err = UpholdError::api(503, "Service Unavailable", "down", "/assets");
        let result = failure_result("assets", &err);

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Failed to fetch assets: API error: 503 Service Unavailable - down"
        );
    }

    #[test]
    fn test_failure_result_unexpected_error() {
        let err = UpholdError::unexpected("error decoding response body");
        let result = failure_result("assets", &err);

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Unexpected error: error decoding response body"
        );
    }

    #[test]
    fn test_parse_params_missing_arguments() {
        let params: Result<NoParams, _> = parse_params(None);
        assert!(params.is_ok());
    }

    #[test]
    fn test_parse_params_invalid_arguments() {
        #[derive(Debug, Deserialize)]
        struct Needs {
            #[allow(dead_code)]
            pair: String,
        }

        let mut args = JsonObject::new();
        args.insert("pair".to_string(), json!(42));
        let err = parse_params::<Needs>(Some(args)).unwrap_err();
        assert!(err.message.contains("invalid type"));
    }
}
