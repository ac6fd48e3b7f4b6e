//! minirisk CLI - discount factors, FX crosses and DV01 from text feeds.
//!
//! # Usage
//!
//! ```bash
//! # Discount factor for EUR at 45 days
//! minirisk --rates rates.txt --portfolio portfolio.txt discount EUR 45
//!
//! # Single-tenor and parallel DV01
//! minirisk --rates rates.txt --portfolio portfolio.txt dv01 USD --tenor 360
//! minirisk --rates rates.txt --portfolio portfolio.txt dv01 USD
//!
//! # Everything, as JSON
//! minirisk --rates rates.txt --portfolio portfolio.txt report --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, DEFAULT_LOG_FILTER};

fn init_tracing(cli: &Cli) {
    // No subscriber at all when quiet: every event is discarded.
    if cli.quiet {
        return;
    }
    let filter = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let format = cli.format;
    let mut engine = commands::load_engine(&cli)?;

    match cli.command {
        Commands::Discount(args) => commands::query::discount(args, &engine, format)?,
        Commands::Fx(args) => commands::query::fx(args, &engine, format)?,
        Commands::Tenors(args) => commands::query::tenors(args, &engine, format)?,
        Commands::Maturities(args) => commands::query::maturities(args, &engine, format)?,
        Commands::Dv01(args) => commands::risk::dv01(args, &mut engine, format)?,
        Commands::Profile(args) => commands::risk::profile(args, &mut engine, format)?,
        Commands::Report => commands::report::execute(&mut engine, format)?,
    }

    Ok(())
}
