//! Minimal HTTP GET client for JSON APIs.
//!
//! Every request is a plain GET against `base_url + endpoint`. Failures are
//! normalized into [`UpholdError`]: non-success statuses become `Api` errors
//! carrying the status and endpoint, everything else becomes `Unexpected`.

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{UpholdError, UpholdResult};

/// User agent sent when the configuration does not provide one.
pub const DEFAULT_USER_AGENT: &str = concat!("http-client/", env!("CARGO_PKG_VERSION"));

/// Body text used when an error response body cannot be read.
const UNKNOWN_ERROR_BODY: &str = "Unknown error";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Root address every endpoint is appended to.
    pub base_url: String,

    /// Value of the `User-Agent` header.
    pub user_agent: Option<String>,
}

/// A GET-only HTTP client bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HttpClientConfig) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config,
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint.
    ///
    /// The endpoint is appended verbatim; path segments must already be
    /// percent-encoded by the caller.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Issue a GET request and decode the JSON body.
    ///
    /// Use `serde_json::Value` as `T` to get the body untyped.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> UpholdResult<T> {
        let url = self.url(endpoint);
        let user_agent = self
            .config
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);

        debug!("GET {}", url);

        let response = self
            .inner
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| UNKNOWN_ERROR_BODY.to_string());
            warn!("GET {} failed with status {}", endpoint, status);
            return Err(UpholdError::api(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                &body,
                endpoint,
            ));
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, user_agent: Option<&str>) -> HttpClient {
        HttpClient::new(HttpClientConfig {
            base_url: server.uri(),
            user_agent: user_agent.map(str::to_string),
        })
    }

    #[test]
    fn test_url_is_plain_concatenation() {
        let client = HttpClient::new(HttpClientConfig {
            base_url: "https://api.uphold.com/v0".to_string(),
            user_agent: None,
        });
        assert_eq!(client.url("/assets"), "https://api.uphold.com/v0/assets");
    }

    #[tokio::test]
    async fn test_get_returns_body_unchanged() {
        let server = MockServer::start().await;
        let body = json!([{ "code": "BTC", "nested": { "n": 1 }, "list": [1, "two", null] }]);

        Mock::given(method("GET"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let result: Value = client.get("/assets").await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_get_sends_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/countries"))
            .and(header("content-type", "application/json"))
            .and(header("user-agent", "test-agent/9.9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-agent/9.9"));
        let result: Value = client.get("/countries").await.unwrap();
        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn test_get_uses_default_user_agent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ticker"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let _: Value = client.get("/ticker").await.unwrap();
    }

    #[tokio::test]
    async fn test_get_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ticker/XYZ"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client.get::<Value>("/ticker/XYZ").await.unwrap_err();
        match err {
            UpholdError::Api {
                message,
                status_code,
                endpoint,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(endpoint, "/ticker/XYZ");
                assert_eq!(message, "API error: 500 Internal Server Error - boom");
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_unreadable_error_body_uses_fallback() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Promise 100 body bytes, send 7, then hang up.
        let upstream = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial",
                )
                .await
                .unwrap();
            socket.flush().await.unwrap();
        });

        let client = HttpClient::new(HttpClientConfig {
            base_url: format!("http://{}", addr),
            user_agent: None,
        });
        let err = client.get::<Value>("/ticker").await.unwrap_err();
        upstream.await.unwrap();

        match err {
            UpholdError::Api {
                message,
                status_code,
                endpoint,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(endpoint, "/ticker");
                assert_eq!(message, "API error: 500 Internal Server Error - Unknown error");
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_invalid_json_is_unexpected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client.get::<Value>("/assets").await.unwrap_err();
        assert!(matches!(err, UpholdError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_get_decode_error_keeps_cause() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let message = client.get::<Value>("/assets").await.unwrap_err().to_string();
        assert!(message.starts_with("error decoding response body"), "{message}");
        assert!(message.contains("expected value at line 1 column 1"), "{message}");
    }

    #[tokio::test]
    async fn test_get_connection_failure_is_unexpected() {
        let server = MockServer::start().await;
        let base_url = server.uri();
        drop(server);

        let client = HttpClient::new(HttpClientConfig {
            base_url,
            user_agent: None,
        });
        let err = client.get::<Value>("/assets").await.unwrap_err();
        assert!(matches!(err, UpholdError::Unexpected(_)));
    }
}
