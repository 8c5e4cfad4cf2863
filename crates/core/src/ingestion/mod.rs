//! Ingestion module - sources that produce validated holdings.

mod csv_provider;
mod ingestion_traits;
mod mock_provider;

pub use csv_provider::{load_holdings_from_csv, parse_holdings_csv, CsvPortfolioProvider};
pub use ingestion_traits::PortfolioProviderTrait;
pub use mock_provider::MockPanPortfolioProvider;
