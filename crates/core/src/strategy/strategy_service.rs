use log::debug;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::goals::Goal;
use crate::portfolio::Holding;

use super::strategy_calculator::{
    allocation_to_display_pct, contribution_allocation, current_allocation,
    expected_annual_return, project_future_value, rebalance_amounts, target_allocation,
    to_display_pct, total_value, underweight_classes,
};
use super::StrategyRecommendation;

/// Trait for goal-based strategy computation.
pub trait StrategyEngineTrait: Send + Sync {
    /// Builds a recommendation for reaching `goal` from `holdings`, investing
    /// `monthly_investment` at the end of every month until the goal date.
    fn recommend(
        &self,
        holdings: &[Holding],
        goal: &Goal,
        monthly_investment: Decimal,
    ) -> Result<StrategyRecommendation>;
}

/// Stateless strategy engine backed by the fixed rule tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyEngine;

impl StrategyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl StrategyEngineTrait for StrategyEngine {
    fn recommend(
        &self,
        holdings: &[Holding],
        goal: &Goal,
        monthly_investment: Decimal,
    ) -> Result<StrategyRecommendation> {
        if monthly_investment < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Monthly investment cannot be negative, got {}",
                monthly_investment
            ))
            .into());
        }

        let total = total_value(holdings)?;
        let current = current_allocation(holdings, total)?;
        let target = target_allocation(goal.risk_profile, goal.years_to_goal);
        debug!(
            "Goal '{}': {} holdings worth {}, {} profile over {} years, underweight {:?}",
            goal.name,
            holdings.len(),
            total,
            goal.risk_profile,
            goal.years_to_goal,
            underweight_classes(&target, &current)
        );

        let rebalance = rebalance_amounts(&target, &current, total);
        let contribution_split = contribution_allocation(&target, &current);

        let expected_return = expected_annual_return(&target);
        let projected_value =
            project_future_value(total, goal.years_to_goal, expected_return, monthly_investment)?;

        Ok(StrategyRecommendation {
            current_value: total.round_dp(DISPLAY_DECIMAL_PRECISION),
            current_allocation_pct: allocation_to_display_pct(&current),
            target_allocation_pct: allocation_to_display_pct(&target),
            rebalance_amount: rebalance,
            monthly_investment_allocation_pct: allocation_to_display_pct(&contribution_split),
            expected_annual_return_pct: to_display_pct(expected_return),
            projected_value_at_goal: projected_value.round_dp(DISPLAY_DECIMAL_PRECISION),
            on_track: projected_value >= goal.target_amount,
        })
    }
}
