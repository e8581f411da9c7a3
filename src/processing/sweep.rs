//! Boundary sweep over the registered ranges.
//!
//! Walks the sorted boundary events once and emits one row per distinct
//! boundary address, plus a gap row in front of a range start that is not
//! adjacent to the previous boundary.

use super::events::{sorted_boundary_events, Edge};
use crate::error::SweepError;
use crate::models::{Address, Family, Registry};

/// Sweep settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Emit gap rows between non-adjacent boundaries.
    pub show_gaps: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        SweepOptions { show_gaps: true }
    }
}

/// What a report row stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// A range starts or ends at the row address.
    Boundary,
    /// The row address is the first of `size` addresses between two boundaries.
    Gap { size: u128 },
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRow {
    pub kind: RowKind,
    pub address: Address,
    /// One flag per name, in [`SweepReport::names`] order.
    pub active: Vec<bool>,
}

impl SweepRow {
    pub fn is_gap(&self) -> bool {
        matches!(self.kind, RowKind::Gap { .. })
    }

    /// Gap size, `None` for boundary rows.
    pub fn gap_size(&self) -> Option<u128> {
        match self.kind {
            RowKind::Gap { size } => Some(size),
            RowKind::Boundary => None,
        }
    }
}

/// Sorted names plus the ordered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub names: Vec<String>,
    pub family: Family,
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    /// Names whose flag is set on `row`.
    pub fn active_names<'a>(&'a self, row: &SweepRow) -> Vec<&'a str> {
        self.names
            .iter()
            .zip(row.active.iter())
            .filter(|(_, active)| **active)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn boundary_rows(&self) -> impl Iterator<Item = &SweepRow> {
        self.rows.iter().filter(|row| !row.is_gap())
    }

    pub fn gap_rows(&self) -> impl Iterator<Item = &SweepRow> {
        self.rows.iter().filter(|row| row.is_gap())
    }

    /// Sum of all gap sizes, saturating.
    pub fn gap_total(&self) -> u128 {
        self.gap_rows()
            .filter_map(|row| row.gap_size())
            .fold(0u128, |total, size| total.saturating_add(size))
    }
}

/// Run the sweep over every range in `registry`.
///
/// # Returns
/// * `Ok(SweepReport)` - rows in address order
/// * `Err(SweepError::EmptyInput)` - the registry holds no ranges
pub fn sweep(registry: &Registry, options: &SweepOptions) -> Result<SweepReport, SweepError> {
    let family = match registry.family() {
        Some(family) if !registry.is_empty() => family,
        _ => return Err(SweepError::EmptyInput),
    };
    log::info!(
        "#Start sweep() names={} ranges={} show_gaps={}",
        registry.len(),
        registry.ranges().count(),
        options.show_gaps
    );

    let events = sorted_boundary_events(registry);
    let mut rows = Vec::with_capacity(events.len());
    let mut active_count: usize = 0;
    let mut previous: Option<Address> = None;

    for event in &events {
        log::trace!("event {:?} {} {}", event.edge, event.address, event.name);
        match event.edge {
            Edge::Enter => active_count += 1,
            Edge::Exit => {
                assert!(
                    active_count > 0,
                    "active_count below zero at {} should never happen.",
                    event.address
                );
                active_count -= 1;
            }
        }

        // already folded into the row for this address
        if previous == Some(event.address) {
            continue;
        }

        if options.show_gaps && event.edge == Edge::Enter {
            if let Some(last) = previous {
                let distance = event.address.distance_from(&last);
                if distance > 1 {
                    if let Some(first_free) = last.successor() {
                        log::debug!(
                            "gap of {} addresses after {} before {}",
                            distance - 1,
                            last,
                            event.address
                        );
                        rows.push(SweepRow {
                            kind: RowKind::Gap { size: distance - 1 },
                            address: first_free,
                            active: registry.membership(&first_free),
                        });
                    }
                }
            }
        }

        rows.push(SweepRow {
            kind: RowKind::Boundary,
            address: event.address,
            active: registry.membership(&event.address),
        });
        previous = Some(event.address);
    }

    assert_eq!(
        active_count, 0,
        "active_count[{active_count}] left after sweep should never happen."
    );

    let report = SweepReport {
        names: registry.names().into_iter().map(String::from).collect(),
        family,
        rows,
    };
    log::info!(
        "# Sweep done rows={} boundaries={} gaps={} unlisted={}",
        report.rows.len(),
        report.boundary_rows().count(),
        report.gap_rows().count(),
        report.gap_total()
    );
    Ok(report)
}
