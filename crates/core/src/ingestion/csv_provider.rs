//! Broker export ingestion from CSV files.
//!
//! Expected columns are `symbol`, `asset_class` and `market_value`, in any
//! order. Additional columns are ignored.

use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::{Result, ValidationError};
use crate::portfolio::{AssetClass, Holding};

use super::PortfolioProviderTrait;

const REQUIRED_HEADERS: [&str; 3] = ["symbol", "asset_class", "market_value"];

/// One raw row of a holdings export, before validation.
#[derive(Debug, Deserialize)]
struct HoldingRecord {
    symbol: String,
    asset_class: String,
    market_value: String,
}

/// Provider that treats the identifier as a path to a CSV export.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvPortfolioProvider;

impl CsvPortfolioProvider {
    pub fn new() -> Self {
        Self
    }
}

impl PortfolioProviderTrait for CsvPortfolioProvider {
    fn id(&self) -> &'static str {
        "CSV"
    }

    fn fetch_holdings(&self, identifier: &str) -> Result<Vec<Holding>> {
        load_holdings_from_csv(identifier)
    }
}

/// Reads and validates holdings from a CSV file on disk.
pub fn load_holdings_from_csv(file_path: impl AsRef<Path>) -> Result<Vec<Holding>> {
    let file_path = file_path.as_ref();
    let content = std::fs::read(file_path).map_err(|e| {
        ValidationError::InvalidInput(format!(
            "Cannot read portfolio file '{}': {}",
            file_path.display(),
            e
        ))
    })?;

    let holdings = parse_holdings_csv(&content)?;
    debug!(
        "Loaded {} holdings from {}",
        holdings.len(),
        file_path.display()
    );
    Ok(holdings)
}

/// Parses and validates holdings from raw CSV bytes.
///
/// A UTF-8 byte order mark is skipped. Row numbers in errors count data rows
/// from 1, excluding the header.
pub fn parse_holdings_csv(content: &[u8]) -> Result<Vec<Holding>> {
    let content = content.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(content);

    let headers = reader.headers()?.clone();
    let missing = REQUIRED_HEADERS
        .iter()
        .any(|required| !headers.iter().any(|h| h == *required));
    if missing {
        let mut expected = REQUIRED_HEADERS.to_vec();
        expected.sort_unstable();
        return Err(ValidationError::InvalidInput(format!(
            "CSV must contain headers: {:?}",
            expected
        ))
        .into());
    }

    let mut holdings = Vec::new();
    for (index, record) in reader.deserialize::<HoldingRecord>().enumerate() {
        let row = index + 1;
        let record = record.map_err(|e| ValidationError::Csv(format!("row {}: {}", row, e)))?;
        holdings.push(validate_record(record, row)?);
    }

    if holdings.is_empty() {
        return Err(ValidationError::InvalidInput("Portfolio is empty.".to_string()).into());
    }

    Ok(holdings)
}

fn validate_record(record: HoldingRecord, row: usize) -> Result<Holding> {
    if record.symbol.is_empty() {
        return Err(ValidationError::MissingField(format!("symbol (row {})", row)).into());
    }

    let asset_class = AssetClass::from_str(&record.asset_class)
        .map_err(|e| ValidationError::InvalidInput(format!("row {}: {}", row, e)))?;

    let market_value = parse_market_value(&record.market_value, row)?;
    if market_value.is_zero() {
        warn!("Holding {} on row {} has zero market value", record.symbol, row);
    }

    Ok(Holding::new(record.symbol, asset_class, market_value))
}

/// Accepts plain (`1250.50`) and scientific (`1.2505e3`) notation.
fn parse_market_value(raw: &str, row: usize) -> Result<Decimal> {
    if raw.is_empty() {
        return Err(ValidationError::MissingField(format!("market_value (row {})", row)).into());
    }

    let value = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| {
            ValidationError::InvalidInput(format!(
                "row {}: market_value '{}' is not a number",
                row, raw
            ))
        })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::InvalidInput(format!(
            "row {}: market_value cannot be negative, got {}",
            row, value
        ))
        .into());
    }

    Ok(value)
}
