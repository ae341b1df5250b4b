//! Tool Registry - the list of tools this server exposes.
//!
//! Used for startup logging and for tool metadata without building a router.

use rmcp::model::Tool;

#[cfg(feature = "all-tickers")]
use super::definitions::GetAllTickersTool;
use super::definitions::{
    GetAssetsTool, GetCountriesTool, GetTickerByCurrencyTool, GetTickerPairTool,
};

/// Tool registry - static view of all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names, in registration order.
    pub fn tool_names() -> Vec<&'static str> {
        #[allow(unused_mut)]
        let mut names = vec![
            GetAssetsTool::NAME,
            GetCountriesTool::NAME,
            GetTickerByCurrencyTool::NAME,
            GetTickerPairTool::NAME,
        ];
        #[cfg(feature = "all-tickers")]
        names.push(GetAllTickersTool::NAME);
        names
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        #[allow(unused_mut)]
        let mut tools = vec![
            GetAssetsTool::to_tool(),
            GetCountriesTool::to_tool(),
            GetTickerByCurrencyTool::to_tool(),
            GetTickerPairTool::to_tool(),
        ];
        #[cfg(feature = "all-tickers")]
        tools.push(GetAllTickersTool::to_tool());
        tools
    }
}
