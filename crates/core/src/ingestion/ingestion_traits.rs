use crate::errors::Result;
use crate::portfolio::Holding;

/// Trait for portfolio sources.
///
/// Implementations turn an identifier (a file path, an account number, ...)
/// into a non-empty list of validated holdings. The strategy engine never
/// sees this trait; callers fetch holdings first and pass them in.
pub trait PortfolioProviderTrait: Send + Sync {
    /// Short name used in logs, e.g. "CSV".
    fn id(&self) -> &'static str;

    /// Fetches and normalizes the holdings for `identifier`.
    fn fetch_holdings(&self, identifier: &str) -> Result<Vec<Holding>>;
}
