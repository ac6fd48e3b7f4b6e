//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{parse_date, CurrencyArgs, DiscountArgs, Dv01Args, FxArgs};

/// Default tracing filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,minirisk=info";

/// minirisk - discount factors, FX crosses and DV01 from text feeds
#[derive(Parser, Debug)]
#[command(name = "minirisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rate and FX spot feed
    #[arg(long, env = "MINIRISK_RATES")]
    pub rates: PathBuf,

    /// Trade feed
    #[arg(long, env = "MINIRISK_PORTFOLIO")]
    pub portfolio: PathBuf,

    /// TOML engine configuration
    #[arg(short, long, env = "MINIRISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Valuation date as days since 1900-01-01 (overrides the config)
    #[arg(long, allow_negative_numbers = true)]
    pub valuation_delta: Option<i32>,

    /// Valuation date, YYYY-MM-DD (overrides the config)
    #[arg(long, value_parser = parse_date)]
    pub valuation_date: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress logging and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Tracing filter, e.g. "debug" or "warn,minirisk_engine=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discount factor for a currency at a tenor in days
    Discount(DiscountArgs),

    /// FX cross rate: units of TERM per unit of BASE
    Fx(FxArgs),

    /// Curve tenors for a currency, ascending
    Tenors(CurrencyArgs),

    /// Trade maturities for a currency, ascending
    Maturities(CurrencyArgs),

    /// DV01 in the reference currency, parallel or for one tenor
    Dv01(Dv01Args),

    /// Key-rate DV01 for every curve tenor
    Profile(CurrencyArgs),

    /// Summary of every currency with data
    Report,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    Minimal,
}
