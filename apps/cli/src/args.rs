use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgGroup, Parser};
use goalfolio_core::RiskProfile;
use rust_decimal::Decimal;

/// Broker-agnostic goal-based portfolio strategy
#[derive(Debug, Parser)]
#[command(name = "goalfolio", version, about)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["source_file", "source_pan"])
))]
pub struct Cli {
    /// Path to broker export CSV (symbol,asset_class,market_value)
    #[arg(long, value_name = "PATH")]
    pub source_file: Option<PathBuf>,

    /// PAN for provider-based portfolio fetch
    #[arg(long, value_name = "PAN")]
    pub source_pan: Option<String>,

    /// Goal name
    #[arg(long)]
    pub goal: String,

    /// Goal target amount
    #[arg(long, value_name = "AMOUNT", value_parser = parse_amount)]
    pub target: Decimal,

    /// Years to goal
    #[arg(long)]
    pub years: u32,

    /// Risk profile: conservative, moderate, growth or aggressive
    #[arg(long)]
    pub risk: RiskProfile,

    /// Planned monthly contribution
    #[arg(long, value_name = "AMOUNT", default_value = "0", value_parser = parse_amount)]
    pub monthly_investment: Decimal,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Where the holdings come from.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioSource {
    File(PathBuf),
    Pan(String),
}

impl Cli {
    /// The selected holdings source.
    ///
    /// The required `source` group guarantees exactly one of the two flags
    /// after parsing.
    pub fn source(&self) -> PortfolioSource {
        match &self.source_file {
            Some(path) => PortfolioSource::File(path.clone()),
            None => PortfolioSource::Pan(self.source_pan.clone().unwrap_or_default()),
        }
    }
}

/// Parses a currency amount in plain (`25000.50`) or scientific (`1e7`) notation.
fn parse_amount(s: &str) -> Result<Decimal, String> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| format!("'{}' is not a valid amount", s))
}
