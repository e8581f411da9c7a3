//! Domain models for the range map.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Address`] - fixed-width IPv4/IPv6 address with byte-wise arithmetic
//! - [`Cidr`] - address with prefix length
//! - [`AddressRange`] - named closed interval built from a [`Cidr`]
//! - [`Registry`] - name to ranges lookup

mod address;
mod cidr;
mod range;
mod registry;

// Re-export public types
pub use address::{get_cidr_mask, Address, Family, MAX_BYTES};
pub use cidr::Cidr;
pub use range::AddressRange;
pub use registry::{Registry, RegistryMode};
