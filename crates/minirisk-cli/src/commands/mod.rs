//! CLI command implementations.

pub mod query;
pub mod report;
pub mod risk;

pub use query::{CurrencyArgs, DiscountArgs, FxArgs};
pub use risk::Dv01Args;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use minirisk_core::Currency;
use minirisk_engine::{EngineConfig, RiskEngine};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::output::print_warning;

/// Parses a currency code, case-insensitively.
pub fn parse_currency(s: &str) -> CliResult<Currency> {
    s.trim()
        .to_ascii_uppercase()
        .parse()
        .map_err(|_| CliError::UnknownCurrency(s.to_string()))
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Resolves the configuration: file (if any), then command-line overrides.
pub fn engine_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(date) = cli.valuation_date {
        // A command-line date beats a delta from the file.
        config.valuation_date = Some(date);
        config.valuation_delta = None;
    }
    if let Some(delta) = cli.valuation_delta {
        config.valuation_delta = Some(delta);
    }
    debug!(?config, "resolved configuration");
    Ok(config)
}

/// Builds the engine from the feeds named on the command line.
pub fn load_engine(cli: &Cli) -> Result<RiskEngine> {
    let config = engine_config(cli)?;
    let engine = RiskEngine::from_files(config, &cli.rates, &cli.portfolio)
        .context("building risk engine")?;

    let rejected = engine.summary().rejected();
    if rejected > 0 && !cli.quiet {
        print_warning(&format!("{rejected} feed record(s) skipped; see log for details"));
    }
    Ok(engine)
}
