//! Strategy recommendation model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::AssetClassMap;

/// Outcome of a goal-based strategy run.
///
/// Percentages are on a 0-100 scale and, like the currency amounts,
/// rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    /// Total market value of the holdings
    pub current_value: Decimal,
    /// Share of each asset class in the current portfolio
    pub current_allocation_pct: AssetClassMap<Decimal>,
    /// Glide-path adjusted target share of each asset class
    pub target_allocation_pct: AssetClassMap<Decimal>,
    /// Signed amount to move into (positive) or out of (negative) each class
    pub rebalance_amount: AssetClassMap<Decimal>,
    /// How new monthly contributions should be split
    pub monthly_investment_allocation_pct: AssetClassMap<Decimal>,
    /// Blended expected return of the target allocation
    pub expected_annual_return_pct: Decimal,
    /// Value of the portfolio plus contributions at the goal horizon
    pub projected_value_at_goal: Decimal,
    pub on_track: bool,
}
