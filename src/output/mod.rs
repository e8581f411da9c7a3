//! Output formatting for the sweep report.
//!
//! This module handles formatting the report rows:
//! - [`terminal`] - aligned text map, optionally coloured
//! - [`csv`] - CSV output
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

use crate::error::SweepError;
use crate::processing::SweepReport;

pub use csv::{escape_csv_field, report_csv};
pub use json::report_json;
pub use terminal::{format_row, report_text, token_string};

/// Output format selected on the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Render the whole report in `format`. `color` only affects text output.
pub fn render(
    report: &SweepReport,
    format: OutputFormat,
    color: bool,
) -> Result<String, SweepError> {
    log::info!("#Start render() format={format:?} rows={}", report.rows.len());
    match format {
        OutputFormat::Text => Ok(report_text(report, color)),
        OutputFormat::Csv => Ok(report_csv(report)),
        OutputFormat::Json => report_json(report),
    }
}
