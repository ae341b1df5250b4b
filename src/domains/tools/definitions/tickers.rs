//! Uphold ticker tools.
//!
//! Exchange rates (ask/bid) for currency pairs:
//! - `get-ticker-by-currency`: one currency against all others
//! - `get-ticker-pair`: a single pair such as `BTCUSD`
//! - `get-all-tickers`: every pair at once (feature `all-tickers`)

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::uphold::UpholdClient;

#[cfg(feature = "all-tickers")]
use super::common::NoParams;
use super::common::{parse_params, tool_result};

// ============================================================================
// Ticker by currency
// ============================================================================

/// Parameters for ticker-by-currency lookups.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TickerByCurrencyParams {
    /// Currency code, e.g. `USD`.
    #[schemars(description = "The currency code to get rates for (e.g., 'USD', 'BTC', 'ETH', 'EUR')")]
    pub currency: String,
}

/// Uphold Ticker-by-Currency Tool implementation.
#[derive(Debug, Clone)]
pub struct GetTickerByCurrencyTool;

impl GetTickerByCurrencyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-ticker-by-currency";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get exchange rates for a specific currency against all \
         other currencies on Uphold. For example, get all BTC trading pairs or all USD trading pairs.";

    /// Execute the tool logic.
    pub async fn execute(client: &UpholdClient, params: &TickerByCurrencyParams) -> CallToolResult {
        info!("Fetching tickers for currency: {}", params.currency);
        tool_result(
            &format!("ticker for {}", params.currency),
            client.get_ticker_by_currency(&params.currency).await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TickerByCurrencyParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>(client: Arc<UpholdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                let params: TickerByCurrencyParams = parse_params(args)?;
                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Ticker pair
// ============================================================================

/// Parameters for single pair lookups.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TickerPairParams {
    /// Concatenated currency codes, e.g. `BTCUSD`.
    #[schemars(description = "The currency pair to get the rate for (e.g., 'BTCUSD', 'ETHUSD', 'BTCEUR')")]
    pub pair: String,
}

/// Uphold Ticker Pair Tool implementation.
#[derive(Debug, Clone)]
pub struct GetTickerPairTool;

impl GetTickerPairTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-ticker-pair";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the exchange rate for a specific currency pair on \
         Uphold. Returns the ask and bid prices for the pair. The pair format is the two currency \
         codes concatenated (e.g., 'BTCUSD' for Bitcoin to US Dollar).";

    /// Execute the tool logic.
    pub async fn execute(client: &UpholdClient, params: &TickerPairParams) -> CallToolResult {
        info!("Fetching ticker for pair: {}", params.pair);
        tool_result(
            &format!("ticker for pair {}", params.pair),
            client.get_ticker_pair(&params.pair).await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TickerPairParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>(client: Arc<UpholdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                let params: TickerPairParams = parse_params(args)?;
                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// All tickers
// ============================================================================

/// Uphold All-Tickers Tool implementation.
#[cfg(feature = "all-tickers")]
#[derive(Debug, Clone)]
pub struct GetAllTickersTool;

#[cfg(feature = "all-tickers")]
impl GetAllTickersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-all-tickers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get exchange rates for all currency pairs on Uphold. \
         Returns ask and bid prices for every available trading pair. Useful for getting a complete \
         market overview.";

    /// Execute the tool logic.
    pub async fn execute(client: &UpholdClient) -> CallToolResult {
        info!("Fetching all tickers");
        tool_result("tickers", client.get_all_tickers().await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>(client: Arc<UpholdClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                let _: NoParams = parse_params(args)?;
                Ok(Self::execute(&client).await)
            }
            .boxed()
        })
    }
}
