//! Market data queries: discount factors, FX, tenors, maturities.

use anyhow::Result;
use clap::Args;

use minirisk_core::Currency;
use minirisk_engine::RiskEngine;

use crate::cli::OutputFormat;
use crate::commands::parse_currency;
use crate::output::{print_days, print_value};

/// A single currency.
#[derive(Args, Debug)]
pub struct CurrencyArgs {
    /// Currency code, e.g. USD
    #[arg(value_parser = parse_currency)]
    pub currency: Currency,
}

/// Arguments for the discount command.
#[derive(Args, Debug)]
pub struct DiscountArgs {
    /// Currency code
    #[arg(value_parser = parse_currency)]
    pub currency: Currency,

    /// Tenor in days from the valuation date
    #[arg(allow_negative_numbers = true)]
    pub tenor: i32,
}

/// Arguments for the fx command.
#[derive(Args, Debug)]
pub struct FxArgs {
    /// Base currency
    #[arg(value_parser = parse_currency)]
    pub base: Currency,

    /// Term currency
    #[arg(value_parser = parse_currency)]
    pub term: Currency,
}

/// Prints the discount factor.
pub fn discount(args: DiscountArgs, engine: &RiskEngine, format: OutputFormat) -> Result<()> {
    let df = engine.discount_factor(args.currency, args.tenor)?;
    print_value(&format!("DF {} {}d", args.currency, args.tenor), df, format)?;
    Ok(())
}

/// Prints the FX cross.
pub fn fx(args: FxArgs, engine: &RiskEngine, format: OutputFormat) -> Result<()> {
    let cross = engine.fx_spot(args.base, args.term)?;
    print_value(&format!("{}{}", args.base, args.term), cross, format)?;
    Ok(())
}

/// Prints the curve tenors, ascending.
pub fn tenors(args: CurrencyArgs, engine: &RiskEngine, format: OutputFormat) -> Result<()> {
    let mut tenors = engine.tenors(args.currency);
    tenors.sort_unstable();
    print_days(&format!("{} tenor", args.currency), &tenors, format)?;
    Ok(())
}

/// Prints the trade maturities, ascending.
pub fn maturities(args: CurrencyArgs, engine: &RiskEngine, format: OutputFormat) -> Result<()> {
    let mut maturities = engine.maturities(args.currency);
    maturities.sort_unstable();
    print_days(&format!("{} maturity", args.currency), &maturities, format)?;
    Ok(())
}
