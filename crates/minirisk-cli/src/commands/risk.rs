//! DV01 commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use minirisk_core::Currency;
use minirisk_engine::RiskEngine;

use crate::cli::OutputFormat;
use crate::commands::{parse_currency, CurrencyArgs};
use crate::output::{print_output, print_value};

/// Arguments for the dv01 command.
#[derive(Args, Debug)]
pub struct Dv01Args {
    /// Currency code
    #[arg(value_parser = parse_currency)]
    pub currency: Currency,

    /// Bump only the rate point at this tenor (days) instead of the whole curve
    #[arg(short, long)]
    pub tenor: Option<i32>,
}

/// One key-rate row.
#[derive(Debug, Serialize, Tabled)]
struct ProfileRow {
    #[tabled(rename = "Tenor (days)")]
    tenor: i32,
    #[tabled(rename = "DV01")]
    dv01: f64,
}

/// Prints a parallel or single-tenor DV01.
pub fn dv01(args: Dv01Args, engine: &mut RiskEngine, format: OutputFormat) -> Result<()> {
    let reference = engine.reference_currency();
    let (label, value) = match args.tenor {
        Some(tenor) => (
            format!("DV01 {} {tenor}d ({reference})", args.currency),
            engine.dv01_tenor(args.currency, tenor)?,
        ),
        None => (
            format!("DV01 {} parallel ({reference})", args.currency),
            engine.dv01(args.currency)?,
        ),
    };
    print_value(&label, value, format)?;
    Ok(())
}

/// Prints the key-rate DV01 profile.
pub fn profile(args: CurrencyArgs, engine: &mut RiskEngine, format: OutputFormat) -> Result<()> {
    let rows: Vec<ProfileRow> = engine
        .dv01_profile(args.currency)?
        .into_iter()
        .map(|(tenor, dv01)| ProfileRow { tenor, dv01 })
        .collect();
    print_output(&rows, format)?;
    Ok(())
}
