//! Pure calculations behind a strategy recommendation.
//!
//! All weights are fractions in `[0, 1]`; conversion to percentages happens
//! only when the recommendation is assembled.

use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, MONTHS_PER_YEAR};
use crate::errors::Result;
use crate::goals::RiskProfile;
use crate::portfolio::{AssetClass, AssetClassMap, Holding};

use super::strategy_constants::{
    base_allocation, expected_return, MID_TERM_EQUITY_SHIFT, MID_TERM_MAX_YEARS,
    NEAR_TERM_EQUITY_SHIFT, NEAR_TERM_MAX_YEARS,
};
use super::StrategyError;

/// Sum of the market values of all holdings.
///
/// Fails with [`StrategyError::ValueOverflow`] when the sum leaves the
/// decimal range.
pub fn total_value(holdings: &[Holding]) -> Result<Decimal> {
    let total = holdings
        .iter()
        .try_fold(Decimal::ZERO, |sum, h| sum.checked_add(h.market_value))
        .ok_or(StrategyError::ValueOverflow)?;
    Ok(total)
}

/// Fraction of `total_value` held in each asset class.
///
/// Classes without holdings map to zero. Fails with
/// [`StrategyError::InvalidPortfolio`] when `total_value` is not positive and
/// with [`StrategyError::NegativeHolding`] when any holding is below zero.
pub fn current_allocation(
    holdings: &[Holding],
    total_value: Decimal,
) -> Result<AssetClassMap<Decimal>> {
    if total_value <= Decimal::ZERO {
        return Err(StrategyError::InvalidPortfolio { total_value }.into());
    }

    // Non-negative values keep every class sum within the total.
    if let Some(holding) = holdings.iter().find(|h| h.market_value < Decimal::ZERO) {
        return Err(StrategyError::NegativeHolding {
            symbol: holding.symbol.clone(),
        }
        .into());
    }

    let mut values = AssetClassMap::<Decimal>::default();
    for holding in holdings {
        values[holding.asset_class] = values[holding.asset_class]
            .checked_add(holding.market_value)
            .ok_or(StrategyError::ValueOverflow)?;
    }

    Ok(values.map(|value| *value / total_value))
}

/// Equity weight moved into debt for a goal `years_to_goal` away.
///
/// Capped by `equity` so the shift can never make equity negative.
pub fn glide_path_shift(years_to_goal: u32, equity: Decimal) -> Decimal {
    let cap = if years_to_goal <= NEAR_TERM_MAX_YEARS {
        NEAR_TERM_EQUITY_SHIFT
    } else if years_to_goal <= MID_TERM_MAX_YEARS {
        MID_TERM_EQUITY_SHIFT
    } else {
        Decimal::ZERO
    };
    cap.min(equity)
}

/// Target allocation for a risk profile, shifted along the glide path and
/// renormalized to sum to one.
pub fn target_allocation(risk_profile: RiskProfile, years_to_goal: u32) -> AssetClassMap<Decimal> {
    let mut target = base_allocation(risk_profile);

    let shift = glide_path_shift(years_to_goal, target.equity);
    target.equity -= shift;
    target.debt += shift;

    let sum = target.total();
    if sum.is_zero() {
        return target;
    }
    target.map(|weight| *weight / sum)
}

/// Signed currency amount per class needed to reach the target allocation.
///
/// Each delta is rounded to cents independently, so the four amounts may
/// drift from zero by a few cents.
pub fn rebalance_amounts(
    target: &AssetClassMap<Decimal>,
    current: &AssetClassMap<Decimal>,
    total_value: Decimal,
) -> AssetClassMap<Decimal> {
    AssetClassMap::from_fn(|asset_class| {
        ((target[asset_class] - current[asset_class]) * total_value)
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    })
}

/// Split for new contributions, weighted toward underweight classes.
///
/// Classes at or above target get nothing. When no class is underweight the
/// target allocation itself is used.
pub fn contribution_allocation(
    target: &AssetClassMap<Decimal>,
    current: &AssetClassMap<Decimal>,
) -> AssetClassMap<Decimal> {
    let gaps = AssetClassMap::from_fn(|asset_class| {
        (target[asset_class] - current[asset_class]).max(Decimal::ZERO)
    });

    let gap_total = gaps.total();
    if gap_total.is_zero() {
        return *target;
    }
    gaps.map(|gap| *gap / gap_total)
}

/// Blended expected annual return of an allocation.
pub fn expected_annual_return(allocation: &AssetClassMap<Decimal>) -> Decimal {
    allocation
        .iter()
        .map(|(asset_class, weight)| *weight * expected_return(asset_class))
        .sum()
}

/// Future value of a lump sum plus end-of-month contributions, compounded monthly.
pub fn project_future_value(
    current_value: Decimal,
    years: u32,
    annual_return: Decimal,
    monthly_contribution: Decimal,
) -> Result<Decimal> {
    let overflow = || StrategyError::ProjectionOverflow { years };

    let monthly_rate = annual_return / Decimal::from(MONTHS_PER_YEAR);
    let months = i64::from(years) * i64::from(MONTHS_PER_YEAR);

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powi(months)
        .ok_or_else(overflow)?;
    let lump_sum = current_value.checked_mul(growth).ok_or_else(overflow)?;

    let contributions = if monthly_rate.is_zero() {
        monthly_contribution
            .checked_mul(Decimal::from(months))
            .ok_or_else(overflow)?
    } else {
        (growth - Decimal::ONE)
            .checked_div(monthly_rate)
            .and_then(|factor| monthly_contribution.checked_mul(factor))
            .ok_or_else(overflow)?
    };

    debug!(
        "Projected {} months at {} monthly: lump sum {}, contributions {}",
        months, monthly_rate, lump_sum, contributions
    );

    let projected = lump_sum.checked_add(contributions).ok_or_else(overflow)?;
    Ok(projected)
}

/// Converts a fraction to a percentage rounded for display.
pub fn to_display_pct(fraction: Decimal) -> Decimal {
    (fraction * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Converts every weight of an allocation to a display percentage.
pub fn allocation_to_display_pct(allocation: &AssetClassMap<Decimal>) -> AssetClassMap<Decimal> {
    allocation.map(|weight| to_display_pct(*weight))
}

/// Asset classes whose current weight is below target.
pub fn underweight_classes(
    target: &AssetClassMap<Decimal>,
    current: &AssetClassMap<Decimal>,
) -> Vec<AssetClass> {
    AssetClass::ALL
        .into_iter()
        .filter(|asset_class| current[*asset_class] < target[*asset_class])
        .collect()
}
