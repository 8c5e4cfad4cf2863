//! Holdings domain models.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Asset Class
// =============================================================================

/// Broad asset classes a holding can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Equity,
    Debt,
    Gold,
    Cash,
}

impl AssetClass {
    /// Every asset class, in reporting order.
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Equity,
        AssetClass::Debt,
        AssetClass::Gold,
        AssetClass::Cash,
    ];

    /// Returns the string representation of this asset class.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Debt => "debt",
            AssetClass::Gold => "gold",
            AssetClass::Cash => "cash",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        AssetClass::ALL
            .into_iter()
            .find(|class| class.as_str() == normalized)
            .ok_or_else(|| {
                let mut expected: Vec<&str> = AssetClass::ALL.iter().map(|c| c.as_str()).collect();
                expected.sort_unstable();
                format!(
                    "Invalid asset_class '{}'. Expected one of {:?}",
                    normalized, expected
                )
            })
    }
}

// =============================================================================
// Asset Class Map
// =============================================================================

/// A value for each asset class.
///
/// Every slot is always present, so a mapping built from this type can never
/// miss or duplicate a class. Lookups go through an exhaustive match on
/// [`AssetClass`]; serializes as `{"equity": .., "debt": .., "gold": .., "cash": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetClassMap<T> {
    pub equity: T,
    pub debt: T,
    pub gold: T,
    pub cash: T,
}

impl<T> AssetClassMap<T> {
    /// Builds a map by evaluating `f` once per asset class.
    pub fn from_fn(mut f: impl FnMut(AssetClass) -> T) -> Self {
        Self {
            equity: f(AssetClass::Equity),
            debt: f(AssetClass::Debt),
            gold: f(AssetClass::Gold),
            cash: f(AssetClass::Cash),
        }
    }

    pub fn get(&self, asset_class: AssetClass) -> &T {
        match asset_class {
            AssetClass::Equity => &self.equity,
            AssetClass::Debt => &self.debt,
            AssetClass::Gold => &self.gold,
            AssetClass::Cash => &self.cash,
        }
    }

    pub fn get_mut(&mut self, asset_class: AssetClass) -> &mut T {
        match asset_class {
            AssetClass::Equity => &mut self.equity,
            AssetClass::Debt => &mut self.debt,
            AssetClass::Gold => &mut self.gold,
            AssetClass::Cash => &mut self.cash,
        }
    }

    /// Iterates over `(class, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetClass, &T)> + '_ {
        AssetClass::ALL
            .into_iter()
            .map(move |asset_class| (asset_class, self.get(asset_class)))
    }

    /// Applies `f` to every value, keeping the class association.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> AssetClassMap<U> {
        AssetClassMap::from_fn(|asset_class| f(self.get(asset_class)))
    }
}

impl AssetClassMap<Decimal> {
    /// Sum of all four values.
    pub fn total(&self) -> Decimal {
        self.iter().map(|(_, value)| *value).sum()
    }
}

impl<T> Index<AssetClass> for AssetClassMap<T> {
    type Output = T;

    fn index(&self, asset_class: AssetClass) -> &Self::Output {
        self.get(asset_class)
    }
}

impl<T> IndexMut<AssetClass> for AssetClassMap<T> {
    fn index_mut(&mut self, asset_class: AssetClass) -> &mut Self::Output {
        self.get_mut(asset_class)
    }
}

// =============================================================================
// Holding
// =============================================================================

/// A single position in the portfolio, valued in the portfolio currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub asset_class: AssetClass,
    pub market_value: Decimal,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, asset_class: AssetClass, market_value: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            asset_class,
            market_value,
        }
    }
}
