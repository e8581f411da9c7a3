//! JSON output for the sweep report.

use crate::error::SweepError;
use crate::models::Address;
use crate::processing::SweepReport;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct JsonReport<'a> {
    names: &'a [String],
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize, Debug)]
struct JsonRow<'a> {
    kind: &'static str,
    address: Address,
    active: Vec<&'a str>,
    gap_size: Option<u128>,
}

/// Render the report as pretty-printed JSON, newline terminated.
pub fn report_json(report: &SweepReport) -> Result<String, SweepError> {
    let json = JsonReport {
        names: &report.names,
        rows: report
            .rows
            .iter()
            .map(|row| JsonRow {
                kind: if row.is_gap() { "gap" } else { "boundary" },
                address: row.address,
                active: report.active_names(row),
                gap_size: row.gap_size(),
            })
            .collect(),
    };
    let mut out = serde_json::to_string_pretty(&json)
        .map_err(|e| SweepError::Render(format!("Error serializing JSON: {e}")))?;
    out.push('\n');
    Ok(out)
}
