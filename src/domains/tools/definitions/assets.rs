//! Uphold assets tool.
//!
//! Lists every cryptocurrency and fiat currency supported by Uphold.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::info;

use crate::domains::uphold::UpholdClient;

use super::common::{NoParams, parse_params, tool_result};

/// Uphold Assets Tool implementation.
#[derive(Debug, Clone)]
pub struct GetAssetsTool;

impl GetAssetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-assets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get all supported assets on Uphold. Returns a list of all \
         cryptocurrencies and fiat currencies available for trading, including their codes, names, \
         status, and type.";

    /// Execute the tool logic.
    pub async fn execute(client: &UpholdClient) -> CallToolResult {
        info!("Fetching assets");
        tool_result("assets", client.get_assets().await)
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
