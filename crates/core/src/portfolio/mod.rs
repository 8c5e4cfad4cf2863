//! Portfolio module - holdings and asset class models.

mod holdings_model;

pub use holdings_model::{AssetClass, AssetClassMap, Holding};
