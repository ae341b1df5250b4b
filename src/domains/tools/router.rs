//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; they all share one
//! `UpholdClient` and therefore one connection pool.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::uphold::UpholdClient;

#[cfg(feature = "all-tickers")]
use super::definitions::GetAllTickersTool;
use super::definitions::{
    GetAssetsTool, GetCountriesTool, GetTickerByCurrencyTool, GetTickerPairTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<UpholdClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let router = ToolRouter::new()
        .with_route(GetAssetsTool::create_route(client.clone()))
        .with_route(GetCountriesTool::create_route(client.clone()))
        .with_route(GetTickerByCurrencyTool::create_route(client.clone()))
        .with_route(GetTickerPairTool::create_route(client.clone()));

    #[cfg(feature = "all-tickers")]
    let router = router.with_route(GetAllTickersTool::create_route(client));

    router
}
