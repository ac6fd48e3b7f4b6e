//! Report command implementation.
//!
//! One row per currency with data: name, curve and trade counts, spot against the
//! reference currency, local book value and parallel DV01. Figures a
//! currency lacks the data for are left blank.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use minirisk_core::daycounts::date_from_serial;
use minirisk_core::Currency;
use minirisk_engine::{IngestSummary, RiskEngine};

use crate::cli::OutputFormat;
use crate::output::{format_opt, print_header, print_output, KeyValue};

#[derive(Debug, Serialize, Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Currency")]
    currency: Currency,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Tenors")]
    tenors: usize,
    #[tabled(rename = "Maturities")]
    maturities: usize,
    #[tabled(rename = "FX", display_with = "format_opt")]
    fx: Option<f64>,
    #[tabled(rename = "Book value", display_with = "format_opt")]
    book_value: Option<f64>,
    #[tabled(rename = "DV01", display_with = "format_opt")]
    dv01: Option<f64>,
}

#[derive(Debug, Serialize)]
struct Report {
    valuation_delta: i32,
    valuation_date: Option<String>,
    reference_currency: Currency,
    summary: IngestSummary,
    currencies: Vec<CurrencyRow>,
}

fn build(engine: &mut RiskEngine) -> Report {
    let reference = engine.reference_currency();
    let has_reference_spot = engine.spot(reference).is_some();
    let currencies = engine
        .currencies()
        .into_iter()
        .map(|ccy| {
            let has_curve = engine.curve(ccy).is_some();
            let has_spot = has_reference_spot && engine.spot(ccy).is_some();
            CurrencyRow {
                currency: ccy,
                name: ccy.name(),
                tenors: engine.tenors(ccy).len(),
                maturities: engine.maturities(ccy).len(),
                fx: has_spot.then(|| engine.fx_spot(ccy, reference).ok()).flatten(),
                book_value: has_curve.then(|| engine.book_value(ccy).ok()).flatten(),
                dv01: (has_curve && has_spot)
                    .then(|| engine.dv01(ccy).ok())
                    .flatten(),
            }
        })
        .collect();

    let delta = engine.valuation_delta();
    Report {
        valuation_delta: delta,
        valuation_date: date_from_serial(delta).map(|d| d.to_string()),
        reference_currency: reference,
        summary: engine.summary(),
        currencies,
    }
}

/// Prints the report.
pub fn execute(engine: &mut RiskEngine, format: OutputFormat) -> Result<()> {
    let report = build(engine);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Minimal => print_output(&report.currencies, format)?,
        OutputFormat::Table => {
            print_header("Valuation");
            let s = report.summary;
            let overview = [
                KeyValue::new(
                    "Valuation date",
                    report.valuation_date.clone().unwrap_or_else(|| "-".into()),
                ),
                KeyValue::new("Serial day", report.valuation_delta.to_string()),
                KeyValue::new("Reference currency", report.reference_currency.to_string()),
                KeyValue::new(
                    "Market records",
                    format!("{} accepted, {} skipped", s.market.accepted, s.market.rejected),
                ),
                KeyValue::new(
                    "Trade records",
                    format!("{} accepted, {} skipped", s.trades.accepted, s.trades.rejected),
                ),
            ];
            print_output(&overview, format)?;

            print_header("Currencies");
            print_output(&report.currencies, format)?;
        }
    }
    Ok(())
}
