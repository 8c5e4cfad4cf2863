//! Strategy module - target allocation, rebalancing, and goal projection.

pub mod strategy_calculator;
mod strategy_constants;
mod strategy_errors;
mod strategy_model;
mod strategy_service;

pub use strategy_constants::*;
pub use strategy_errors::StrategyError;
pub use strategy_model::StrategyRecommendation;
pub use strategy_service::{StrategyEngine, StrategyEngineTrait};

#[cfg(test)]
mod strategy_calculator_tests;
