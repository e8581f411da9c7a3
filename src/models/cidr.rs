//! CIDR notation parsing.

use super::{Address, Family};
use crate::error::SweepError;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// An address with a prefix length, e.g. `10.0.0.0/24` or `2001:db8::/32`.
///
/// Host bits in the written address are kept as given; [`Cidr::lo`] and
/// [`Cidr::hi`] mask them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cidr {
    /// The address as written.
    pub addr: Address,
    /// The prefix length (0-32 or 0-128).
    pub mask: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Cidr, SweepError> {
        let invalid = || SweepError::InvalidCidr(addr_cidr.to_string());

        let (addr, mask) = addr_cidr.split_once('/').ok_or_else(invalid)?;
        let ip: IpAddr = addr.parse().map_err(|_| invalid())?;
        // u8::from_str would also take "+8"
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let mask: u8 = mask.parse().map_err(|_| invalid())?;

        let addr = Address::from(ip);
        if mask > addr.family().max_prefix() {
            return Err(invalid());
        }
        Ok(Cidr { addr, mask })
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Address {
        // mask was validated in new()
        self.addr.network(self.mask).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Address {
        self.addr.broadcast(self.mask).unwrap_or(self.addr)
    }
}

impl FromStr for Cidr {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.lo(), self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ipv4() {
        let cidr = Cidr::new("1.2.3.4/8").unwrap();
        assert_eq!(cidr.mask, 8);
        assert_eq!(cidr.family(), Family::V4);
        assert_eq!(cidr.lo().to_string(), "1.0.0.0");
        assert_eq!(cidr.hi().to_string(), "1.255.255.255");
        assert_eq!(cidr.to_string(), "1.0.0.0/8");
    }

    #[test]
    fn test_new_ipv6() {
        let cidr = Cidr::new("2001:db8::1/32").unwrap();
        assert_eq!(cidr.family(), Family::V6);
        assert_eq!(cidr.lo().to_string(), "2001:db8::");
        assert_eq!(
            cidr.hi().to_string(),
            "2001:db8:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_new_host_routes() {
        let cidr = Cidr::new("10.0.0.5/32").unwrap();
        assert_eq!(cidr.lo(), cidr.hi());
        let cidr = Cidr::new("0.0.0.0/0").unwrap();
        assert_eq!(cidr.hi().to_string(), "255.255.255.255");
    }

    #[test]
    fn test_new_invalid() {
        for bad in [
            "not-a-cidr",
            "10.0.0.0",
            "10.0.0.0/",
            "10.0.0.0/33",
            "10.0.0.0/+8",
            "10.0.0.0/-1",
            "10.0.0/8",
            "::/129",
            "10.0.0.0/8/8",
            "",
        ] {
            assert_eq!(
                Cidr::new(bad),
                Err(SweepError::InvalidCidr(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str() {
        let cidr: Cidr = "192.168.0.0/16".parse().unwrap();
        assert_eq!(cidr.hi().to_string(), "192.168.255.255");
    }
}
