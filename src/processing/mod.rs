//! Range map processing logic.
//!
//! This module contains the sweep over the registered ranges:
//! - [`events`] - boundary events and their ordering
//! - [`sweep`] - the walk producing boundary and gap rows

mod events;
mod sweep;

// Re-export public functions
pub use events::{boundary_events, sort_events, sorted_boundary_events, BoundaryEvent, Edge};
pub use sweep::{sweep, RowKind, SweepOptions, SweepReport, SweepRow};
