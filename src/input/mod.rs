//! Input handling.
//!
//! This module turns the command line into a registry:
//! - [`args`] - `NAME=CIDR` token parsing
//! - [`cli`] - clap command line definition

mod args;
mod cli;

// Re-export public types and functions
pub use args::{build_registry, parse_named_cidr, NamedCidr};
pub use cli::{CommandLine, USAGE};
