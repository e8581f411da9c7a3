//! Registry of named address ranges.

use super::{Address, AddressRange, Cidr, Family};
use crate::error::SweepError;
use std::collections::BTreeMap;
use std::fmt;

/// How repeated names are treated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RegistryMode {
    /// One single-character name per range, repeats rejected.
    #[default]
    Single,
    /// A repeated name adds another range to that name.
    Multi,
}

/// Ranges indexed by name. Names iterate in sorted (byte) order.
#[derive(Debug, Default)]
pub struct Registry {
    mode: RegistryMode,
    family: Option<Family>,
    ranges: BTreeMap<String, Vec<AddressRange>>,
}

impl Registry {
    /// Create a new empty Registry.
    pub fn new(mode: RegistryMode) -> Registry {
        Registry {
            mode,
            family: None,
            ranges: BTreeMap::new(),
        }
    }

    /// Family shared by every range, `None` while empty.
    pub fn family(&self) -> Option<Family> {
        self.family
    }

    /// Parse `raw_cidr` and add it under `name`.
    ///
    /// Nothing is added when an error is returned.
    pub fn insert(&mut self, name: &str, raw_cidr: &str) -> Result<&AddressRange, SweepError> {
        self.validate_name(name)?;
        let cidr = Cidr::new(raw_cidr)?;

        if let Some(family) = self.family {
            if family != cidr.family() {
                return Err(SweepError::MixedAddressFamilies(raw_cidr.to_string()));
            }
        }
        if self.mode == RegistryMode::Single && self.ranges.contains_key(name) {
            return Err(SweepError::DuplicateName(name.to_string()));
        }

        self.family = Some(cidr.family());
        let range = AddressRange::new(name, cidr);
        log::debug!("registered {range} ({} addresses)", range.size());

        let owned = self.ranges.entry(name.to_string()).or_default();
        owned.push(range);
        // just pushed, never empty
        Ok(&owned[owned.len() - 1])
    }

    fn validate_name(&self, name: &str) -> Result<(), SweepError> {
        let alphanumeric = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric());
        if !alphanumeric || (self.mode == RegistryMode::Single && name.len() > 1) {
            return Err(SweepError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// Names in sorted order. Column order of every report row.
    pub fn names(&self) -> Vec<&str> {
        self.ranges.keys().map(|name| name.as_str()).collect()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Every range, grouped by name in name order.
    pub fn ranges(&self) -> impl Iterator<Item = &AddressRange> {
        self.ranges.values().flatten()
    }

    pub fn ranges_of(&self, name: &str) -> &[AddressRange] {
        self.ranges.get(name).map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// True when at least one of `name`'s ranges holds `addr`.
    pub fn contains(&self, name: &str, addr: &Address) -> bool {
        self.ranges_of(name).iter().any(|range| range.contains(addr))
    }

    /// [`Registry::contains`] for every name, in [`Registry::names`] order.
    pub fn membership(&self, addr: &Address) -> Vec<bool> {
        self.ranges
            .values()
            .map(|owned| owned.iter().any(|range| range.contains(addr)))
            .collect()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registry ({} names):", self.ranges.len())?;
        for range in self.ranges() {
            writeln!(f, "  - {range}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::from(s.parse::<std::net::IpAddr>().unwrap())
    }

    #[test]
    fn test_insert_single() {
        let mut registry = Registry::new(RegistryMode::Single);
        registry.insert("B", "10.0.0.0/24").unwrap();
        registry.insert("A", "10.0.0.128/25").unwrap();
        assert_eq!(registry.names(), vec!["A", "B"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.family(), Some(Family::V4));
        assert_eq!(
            registry.membership(&addr("10.0.0.200")),
            vec![true, true]
        );
        assert_eq!(registry.membership(&addr("10.0.0.1")), vec![false, true]);
    }

    #[test]
    fn test_insert_duplicate_single() {
        let mut registry = Registry::new(RegistryMode::Single);
        registry.insert("A", "10.0.0.0/24").unwrap();
        assert_eq!(
            registry.insert("A", "10.1.0.0/24").unwrap_err(),
            SweepError::DuplicateName("A".to_string())
        );
        assert_eq!(registry.ranges().count(), 1);
    }

    #[test]
    fn test_insert_multi_appends() {
        let mut registry = Registry::new(RegistryMode::Multi);
        registry.insert("web", "10.0.0.0/24").unwrap();
        registry.insert("web", "10.0.2.0/24").unwrap();
        registry.insert("db", "10.0.1.0/24").unwrap();
        assert_eq!(registry.names(), vec!["db", "web"]);
        assert_eq!(registry.ranges_of("web").len(), 2);
        assert!(registry.contains("web", &addr("10.0.2.9")));
        assert!(!registry.contains("web", &addr("10.0.1.9")));
        assert!(!registry.contains("nope", &addr("10.0.1.9")));
    }

    #[test]
    fn test_invalid_names() {
        let mut registry = Registry::new(RegistryMode::Single);
        assert_eq!(
            registry.insert("AB", "10.0.0.0/24").unwrap_err(),
            SweepError::InvalidName("AB".to_string())
        );
        assert_eq!(
            registry.insert("-", "10.0.0.0/24").unwrap_err(),
            SweepError::InvalidName("-".to_string())
        );
        let mut registry = Registry::new(RegistryMode::Multi);
        assert!(registry.insert("AB", "10.0.0.0/24").is_ok());
        assert_eq!(
            registry.insert("a_b", "10.0.0.0/24").unwrap_err(),
            SweepError::InvalidName("a_b".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_name_checked_before_cidr() {
        let mut registry = Registry::new(RegistryMode::Single);
        assert_eq!(
            registry.insert("AB", "garbage").unwrap_err(),
            SweepError::InvalidName("AB".to_string())
        );
    }

    #[test]
    fn test_mixed_families() {
        let mut registry = Registry::new(RegistryMode::Single);
        registry.insert("A", "10.0.0.0/8").unwrap();
        assert_eq!(
            registry.insert("B", "2001:db8::/32").unwrap_err(),
            SweepError::MixedAddressFamilies("2001:db8::/32".to_string())
        );
        assert!(!registry.is_empty());
        assert_eq!(registry.names(), vec!["A"]);
    }

    #[test]
    fn test_names_case_sensitive() {
        let mut registry = Registry::new(RegistryMode::Single);
        registry.insert("a", "10.0.0.0/8").unwrap();
        registry.insert("A", "11.0.0.0/8").unwrap();
        registry.insert("1", "12.0.0.0/8").unwrap();
        assert_eq!(registry.names(), vec!["1", "A", "a"]);
    }
}
