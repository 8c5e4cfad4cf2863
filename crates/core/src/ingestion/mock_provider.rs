use log::debug;
use rust_decimal_macros::dec;

use crate::constants::PAN_LENGTH;
use crate::errors::{Result, ValidationError};
use crate::portfolio::{AssetClass, Holding};

use super::PortfolioProviderTrait;

/// PAN-based provider returning a fixed demo portfolio.
///
/// Stands in for an account aggregator; only the PAN shape is checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPanPortfolioProvider;

impl MockPanPortfolioProvider {
    pub fn new() -> Self {
        Self
    }
}

impl PortfolioProviderTrait for MockPanPortfolioProvider {
    fn id(&self) -> &'static str {
        "MOCK_PAN"
    }

    fn fetch_holdings(&self, pan: &str) -> Result<Vec<Holding>> {
        let pan = pan.trim().to_uppercase();
        if pan.chars().count() != PAN_LENGTH {
            return Err(ValidationError::InvalidInput("Invalid PAN format.".to_string()).into());
        }

        debug!("Returning demo holdings for PAN {}", pan);
        Ok(vec![
            Holding::new("NIFTYBEES", AssetClass::Equity, dec!(350000)),
            Holding::new("GILT-FUND", AssetClass::Debt, dec!(180000)),
            Holding::new("GOLDBEES", AssetClass::Gold, dec!(80000)),
            Holding::new("SAVINGS", AssetClass::Cash, dec!(40000)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_mock_pan_provider_validates_pan_length() {
        let result = MockPanPortfolioProvider::new().fetch_holdings("ABC");
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_mock_pan_provider_normalizes_pan() {
        let holdings = MockPanPortfolioProvider::new()
            .fetch_holdings("  abcde1234f ")
            .unwrap();
        assert_eq!(holdings.len(), 4);
        assert_eq!(holdings[0].symbol, "NIFTYBEES");
        assert_eq!(holdings[3].asset_class, AssetClass::Cash);
    }
}
