use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the strategy engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// Holdings add up to zero or less, so no allocation can be derived.
    #[error("Portfolio value must be positive, got {total_value}")]
    InvalidPortfolio { total_value: Decimal },

    /// A holding carries a negative market value.
    #[error("Holding {symbol} has a negative market value")]
    NegativeHolding { symbol: String },

    #[error("Portfolio value exceeds the supported range")]
    ValueOverflow,

    #[error("Projected value is out of range for a {years}-year horizon")]
    ProjectionOverflow { years: u32 },
}
