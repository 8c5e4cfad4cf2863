use anyhow::{bail, Context};
use goalfolio_core::ingestion::{
    CsvPortfolioProvider, MockPanPortfolioProvider, PortfolioProviderTrait,
};
use goalfolio_core::{Goal, Holding, StrategyEngine, StrategyEngineTrait};
use rust_decimal::Decimal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::args::{Cli, PortfolioSource};
use crate::config::{Config, LogFormat};

/// Logs go to stderr so stdout carries only the recommendation.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Fetches holdings from the selected source.
pub fn load_holdings(source: &PortfolioSource) -> anyhow::Result<Vec<Holding>> {
    let (provider, identifier): (Box<dyn PortfolioProviderTrait>, String) = match source {
        PortfolioSource::File(path) => (
            Box::new(CsvPortfolioProvider::new()),
            path.to_string_lossy().into_owned(),
        ),
        PortfolioSource::Pan(pan) => (Box::new(MockPanPortfolioProvider::new()), pan.clone()),
    };

    let holdings = provider
        .fetch_holdings(&identifier)
        .with_context(|| format!("Failed to load holdings from {} source", provider.id()))?;
    tracing::info!(
        "Loaded {} holdings via {} provider",
        holdings.len(),
        provider.id()
    );
    Ok(holdings)
}

/// Runs the whole pipeline and returns the rendered recommendation.
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let source = cli.source();

    let goal = Goal::new(cli.goal.clone(), cli.target, cli.years, cli.risk);
    goal.validate().context("Invalid goal")?;
    if cli.monthly_investment < Decimal::ZERO {
        bail!(
            "Monthly investment cannot be negative, got {}",
            cli.monthly_investment
        );
    }

    let holdings = load_holdings(&source)?;

    let engine = StrategyEngine::new();
    let recommendation = engine
        .recommend(&holdings, &goal, cli.monthly_investment)
        .context("Failed to compute strategy")?;
    tracing::info!(
        goal = %goal.name,
        on_track = recommendation.on_track,
        "Strategy computed"
    );

    let output = if config.pretty_json {
        serde_json::to_string_pretty(&recommendation)?
    } else {
        serde_json::to_string(&recommendation)?
    };
    Ok(output)
}
