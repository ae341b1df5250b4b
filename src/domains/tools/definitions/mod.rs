//! Tool definitions module.
//!
//! One file per upstream resource; `common` holds the shared result helpers.

pub mod assets;
pub mod common;
pub mod countries;
pub mod tickers;

pub use assets::GetAssetsTool;
pub use countries::GetCountriesTool;
#[cfg(feature = "all-tickers")]
pub use tickers::GetAllTickersTool;
pub use tickers::{
    GetTickerByCurrencyTool, GetTickerPairTool, TickerByCurrencyParams, TickerPairParams,
};
