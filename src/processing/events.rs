//! Boundary events for the sweep.
//!
//! Every range contributes an `Enter` event at its first address and an `Exit`
//! event at its last address.

use crate::models::{Address, Registry};

/// Which side of a range an event marks.
///
/// The declaration order is the tie-break: `Enter` sorts before `Exit` at the
/// same address, so ranges touching at one address share a row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Edge {
    Enter,
    Exit,
}

/// A sweep-line point: start or inclusive end of one range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryEvent<'a> {
    pub address: Address,
    pub edge: Edge,
    /// Name of the range that produced the event.
    pub name: &'a str,
}

/// Emit the two events of every range in the registry, unsorted.
pub fn boundary_events(registry: &Registry) -> Vec<BoundaryEvent<'_>> {
    registry
        .ranges()
        .flat_map(|range| {
            [
                BoundaryEvent {
                    address: range.start,
                    edge: Edge::Enter,
                    name: range.name.as_str(),
                },
                BoundaryEvent {
                    address: range.end,
                    edge: Edge::Exit,
                    name: range.name.as_str(),
                },
            ]
        })
        .collect()
}

/// Sort by address, then `Enter` before `Exit`.
///
/// Stable, so equal events keep registry order and sorting twice is a no-op.
pub fn sort_events(events: &mut [BoundaryEvent<'_>]) {
    events.sort_by(|a, b| a.address.cmp(&b.address).then(a.edge.cmp(&b.edge)));
}

/// [`boundary_events`] followed by [`sort_events`].
pub fn sorted_boundary_events(registry: &Registry) -> Vec<BoundaryEvent<'_>> {
    let mut events = boundary_events(registry);
    sort_events(&mut events);
    log::trace!("sorted {} boundary events", events.len());
    events
}
