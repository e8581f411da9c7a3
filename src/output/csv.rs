//! CSV output formatting for the sweep report.

use crate::processing::{SweepReport, SweepRow};
use itertools::Itertools;

/// Quote a field when it holds a comma or double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // excel does not like spaces after the comma between fields either
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}

/// Header: `kind,address,<name>...,gap_size`.
fn csv_header(report: &SweepReport) -> String {
    ["kind", "address"]
        .into_iter()
        .map(String::from)
        .chain(report.names.iter().map(|name| escape_csv_field(name)))
        .chain(std::iter::once("gap_size".to_string()))
        .join(",")
}

fn csv_row(row: &SweepRow) -> String {
    let kind = if row.is_gap() { "gap" } else { "boundary" };
    let gap_size = row.gap_size().map(|size| size.to_string()).unwrap_or_default();
    [kind.to_string(), row.address.to_string()]
        .into_iter()
        .chain(row.active.iter().map(|active| u8::from(*active).to_string()))
        .chain(std::iter::once(gap_size))
        .join(",")
}

/// Render the report as CSV, newline terminated.
pub fn report_csv(report: &SweepReport) -> String {
    let mut out = csv_header(report);
    out.push('\n');
    for row in &report.rows {
        out.push_str(&csv_row(row));
        out.push('\n');
    }
    out
}
