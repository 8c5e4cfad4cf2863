//! Goals domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Investor risk appetite, from least to most equity-heavy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Growth,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 4] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Growth,
        RiskProfile::Aggressive,
    ];

    /// Returns the string representation of this risk profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Growth => "growth",
            RiskProfile::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        RiskProfile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == normalized)
            .ok_or_else(|| {
                let expected: Vec<&str> = RiskProfile::ALL.iter().map(|p| p.as_str()).collect();
                format!(
                    "Invalid risk profile '{}'. Expected one of {:?}",
                    normalized, expected
                )
            })
    }
}

/// Domain model representing a financial goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: Decimal,
    pub years_to_goal: u32,
    pub risk_profile: RiskProfile,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Decimal,
        years_to_goal: u32,
        risk_profile: RiskProfile,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            years_to_goal,
            risk_profile,
        }
    }

    /// Checks the goal is usable for planning: a name and a positive target.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("goal name".to_string()).into());
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Goal target amount must be positive, got {}",
                self.target_amount
            ))
            .into());
        }
        Ok(())
    }
}
