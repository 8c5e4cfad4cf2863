//! Fixed rule tables driving the strategy engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::goals::RiskProfile;
use crate::portfolio::{AssetClass, AssetClassMap};

/// Goals this many years away or closer get the near-term equity shift.
pub const NEAR_TERM_MAX_YEARS: u32 = 3;

/// Goals this many years away or closer (but beyond near-term) get the mid-term shift.
pub const MID_TERM_MAX_YEARS: u32 = 7;

/// Maximum equity weight moved into debt for near-term goals.
pub const NEAR_TERM_EQUITY_SHIFT: Decimal = dec!(0.15);

/// Maximum equity weight moved into debt for mid-term goals.
pub const MID_TERM_EQUITY_SHIFT: Decimal = dec!(0.08);

/// Base allocation fractions for a risk profile, before any glide path.
pub fn base_allocation(risk_profile: RiskProfile) -> AssetClassMap<Decimal> {
    match risk_profile {
        RiskProfile::Conservative => AssetClassMap {
            equity: dec!(0.25),
            debt: dec!(0.55),
            gold: dec!(0.10),
            cash: dec!(0.10),
        },
        RiskProfile::Moderate => AssetClassMap {
            equity: dec!(0.45),
            debt: dec!(0.35),
            gold: dec!(0.10),
            cash: dec!(0.10),
        },
        RiskProfile::Growth => AssetClassMap {
            equity: dec!(0.60),
            debt: dec!(0.25),
            gold: dec!(0.10),
            cash: dec!(0.05),
        },
        RiskProfile::Aggressive => AssetClassMap {
            equity: dec!(0.75),
            debt: dec!(0.15),
            gold: dec!(0.05),
            cash: dec!(0.05),
        },
    }
}

/// Long-run expected annual return of an asset class, as a fraction.
pub fn expected_return(asset_class: AssetClass) -> Decimal {
    match asset_class {
        AssetClass::Equity => dec!(0.12),
        AssetClass::Debt => dec!(0.07),
        AssetClass::Gold => dec!(0.06),
        AssetClass::Cash => dec!(0.04),
    }
}
