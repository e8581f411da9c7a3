//! Terminal output.
//!
//! One line per row: the address padded to the family's column width, then one
//! token per name. Gap rows leave the address column blank and end with the
//! gap size.

use crate::processing::{RowKind, SweepReport, SweepRow};
use colored::Colorize;

/// Placeholder for an inactive name.
const INACTIVE: char = '-';

/// Token string for a row: each name when active, dashes of the same width
/// otherwise.
pub fn token_string(names: &[String], active: &[bool], color: bool) -> String {
    names
        .iter()
        .zip(active.iter())
        .map(|(name, active)| {
            if !*active {
                INACTIVE.to_string().repeat(name.chars().count())
            } else if color {
                name.green().bold().to_string()
            } else {
                name.clone()
            }
        })
        .collect()
}

/// Format a single row with the address column `width` wide.
pub fn format_row(row: &SweepRow, tokens: &str, width: usize, color: bool) -> String {
    match row.kind {
        RowKind::Boundary => format!("{:<width$} {tokens}", row.address),
        RowKind::Gap { size } => {
            let note = format!("({size} IPs)");
            let note = if color {
                note.yellow().to_string()
            } else {
                note
            };
            format!("{:width$} {tokens} {note}", "")
        }
    }
}

/// Render every row, newline terminated.
pub fn report_text(report: &SweepReport, color: bool) -> String {
    let width = report.family.column_width();
    let mut out = String::new();
    for row in &report.rows {
        let tokens = token_string(&report.names, &row.active, color);
        out.push_str(&format_row(row, &tokens, width, color));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Family};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    fn addr(s: &str) -> Address {
        Address::from(s.parse::<std::net::IpAddr>().unwrap())
    }

    #[test]
    fn test_token_string() {
        let names = names(&["A", "B", "C"]);
        assert_eq!(token_string(&names, &[true, false, true], false), "A-C");
        assert_eq!(token_string(&names, &[false, false, false], false), "---");
    }

    #[test]
    fn test_token_string_long_names() {
        let names = names(&["db", "web"]);
        assert_eq!(token_string(&names, &[false, true], false), "--web");
    }

    #[test]
    fn test_format_boundary_row() {
        let row = SweepRow {
            kind: RowKind::Boundary,
            address: addr("10.0.0.1"),
            active: vec![true, true],
        };
        assert_eq!(format_row(&row, "AB", 15, false), "10.0.0.1        AB");
    }

    #[test]
    fn test_format_gap_row() {
        let row = SweepRow {
            kind: RowKind::Gap { size: 4 },
            address: addr("10.0.0.1"),
            active: vec![false, false],
        };
        assert_eq!(
            format_row(&row, "--", 15, false),
            "                -- (4 IPs)"
        );
    }

    #[test]
    fn test_report_text() {
        let report = SweepReport {
            names: names(&["A", "B"]),
            family: Family::V4,
            rows: vec![
                SweepRow {
                    kind: RowKind::Boundary,
                    address: addr("10.0.0.0"),
                    active: vec![true, false],
                },
                SweepRow {
                    kind: RowKind::Gap { size: 4 },
                    address: addr("10.0.0.1"),
                    active: vec![false, false],
                },
                SweepRow {
                    kind: RowKind::Boundary,
                    address: addr("10.0.0.5"),
                    active: vec![false, true],
                },
            ],
        };
        assert_eq!(
            report_text(&report, false),
            "10.0.0.0        A-\n                -- (4 IPs)\n10.0.0.5        -B\n"
        );
    }
}
