//! Named address range.

use super::{Address, Cidr};
use std::fmt;

/// A closed interval `[start, end]` owned by a name, built from a CIDR block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRange {
    /// Name owning this range.
    pub name: String,
    /// The block the range was built from.
    pub cidr: Cidr,
    /// Network address.
    pub start: Address,
    /// Last address, inclusive.
    pub end: Address,
}

impl AddressRange {
    pub fn new(name: &str, cidr: Cidr) -> AddressRange {
        AddressRange {
            name: name.to_string(),
            cidr,
            start: cidr.lo(),
            end: cidr.hi(),
        }
    }

    /// True when `start <= addr <= end`.
    pub fn contains(&self, addr: &Address) -> bool {
        *addr >= self.start && *addr <= self.end
    }

    /// Number of addresses in the range.
    pub fn size(&self) -> u128 {
        // saturates for ::/0, whose size is 2^128
        self.end.distance_from(&self.start).saturating_add(1)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} [{} - {}]", self.name, self.cidr, self.start, self.end)
    }
}
