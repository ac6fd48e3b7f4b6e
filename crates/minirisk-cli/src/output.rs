//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Prints rows as a table, a JSON array, or one compact JSON line per row.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Minimal => {
            for row in data {
                println!("{}", serde_json::to_string(row)?);
            }
        }
    }
    Ok(())
}

/// Prints one named number. Minimal output is the bare number.
pub fn print_value(label: &str, value: f64, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(&[KeyValue::new(label, format!("{value:.10}"))]),
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(label.to_string(), serde_json::json!(value));
            println!("{}", serde_json::to_string_pretty(&object)?);
        }
        OutputFormat::Minimal => println!("{value}"),
    }
    Ok(())
}

/// Prints a list of day counts. Minimal output is space-separated.
pub fn print_days(label: &str, days: &[i32], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<_> = days.iter().map(|d| KeyValue::new(label, d.to_string())).collect();
            print_table(&rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(days)?),
        OutputFormat::Minimal => {
            let line: Vec<String> = days.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Formats an optional number for a table cell.
pub fn format_opt(value: &Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.6}"),
        None => "-".dimmed().to_string(),
    }
}
