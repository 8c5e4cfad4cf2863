//! Goalfolio Core - Domain entities, the strategy engine, and ingestion providers.
//!
//! The strategy engine is a pure computation over holdings and a goal. It
//! performs no I/O and never depends on the ingestion providers; those are
//! wired together by the application layer.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod ingestion;
pub mod portfolio;
pub mod strategy;

// Re-export common domain types
pub use goals::{Goal, RiskProfile};
pub use portfolio::{AssetClass, AssetClassMap, Holding};
pub use strategy::{StrategyEngine, StrategyEngineTrait, StrategyRecommendation};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
