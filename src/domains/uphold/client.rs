//! Uphold API client with one method per public endpoint.
//!
//! Bodies are returned exactly as the API sent them. Expected shapes:
//! - ticker: `{ask, bid, currency, pair}`, decimals as strings
//! - asset: `{code, name, status, type}`
//! - country: `{code, currency, name}`
//!
//! See <https://docs.uphold.com/> for the upstream documentation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use tracing::info;

use crate::core::config::UpholdConfig;

use super::error::{UpholdError, UpholdResult};
use super::http::{HttpClient, HttpClientConfig};

/// Characters escaped in a path segment: everything but the unreserved
/// marks kept by JavaScript's `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use as a single URL path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Client for Uphold's public (unauthenticated) endpoints.
#[derive(Debug, Clone)]
pub struct UpholdClient {
    http: HttpClient,
}

impl UpholdClient {
    /// Create a client from configuration.
    ///
    /// Fails when no base URL is configured, so a misconfigured server never
    /// starts.
    pub fn new(config: &UpholdConfig) -> UpholdResult<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                UpholdError::config("UPHOLD_API_BASE_URL environment variable is required")
            })?;

        info!("Uphold API client targeting {}", base_url);

        Ok(Self {
            http: HttpClient::new(HttpClientConfig {
                base_url: base_url.to_string(),
                user_agent: config.user_agent.clone(),
            }),
        })
    }

    #[cfg(test)]
    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Get all supported assets (cryptocurrencies and fiat currencies).
    pub async fn get_assets(&self) -> UpholdResult<Value> {
        self.http.get("/assets").await
    }

    /// Get all supported countries.
    pub async fn get_countries(&self) -> UpholdResult<Value> {
        self.http.get("/countries").await
    }

    /// Get tickers for every currency pair.
    pub async fn get_all_tickers(&self) -> UpholdResult<Value> {
        self.http.get("/ticker").await
    }

    /// Get tickers for one currency against all others (e.g. `USD`, `BTC`).
    pub async fn get_ticker_by_currency(&self, currency: &str) -> UpholdResult<Value> {
        self.http
            .get(&format!("/ticker/{}", encode_segment(currency)))
            .await
    }

    /// Get the ticker for one currency pair (e.g. `BTCUSD`).
    pub async fn get_ticker_pair(&self, pair: &str) -> UpholdResult<Value> {
        self.http
            .get(&format!("/ticker/{}", encode_segment(pair)))
            .await
    }
}
