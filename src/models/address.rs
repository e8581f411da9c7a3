//! Fixed-width IP addresses.
//!
//! Provides [`Address`], an IPv4 or IPv6 address stored as big-endian bytes,
//! along with the prefix mask helpers used to turn a CIDR into a range.
//! All arithmetic is done byte by byte over the full address width.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Widest address we store (IPv6, 16 bytes).
pub const MAX_BYTES: usize = 16;

/// Address family of an [`Address`] or [`crate::models::Cidr`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bytes in an address of this family.
    pub fn byte_len(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }

    /// Maximum prefix length (32 or 128 bits).
    pub fn max_prefix(self) -> u8 {
        (self.byte_len() * 8) as u8
    }

    /// Width of the address column in text output.
    pub fn column_width(self) -> usize {
        match self {
            Family::V4 => 15,
            Family::V6 => 39,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Build the netmask bytes for a prefix length.
///
/// Returns `None` when `len` is longer than the family allows.
///
/// # Examples
/// ```
/// use cidrviz::models::{get_cidr_mask, Family};
/// assert_eq!(&get_cidr_mask(Family::V4, 20).unwrap()[..4], &[255, 255, 240, 0]);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Option<[u8; MAX_BYTES]> {
    if len > family.max_prefix() {
        return None;
    }
    let mut mask = [0u8; MAX_BYTES];
    let mut remaining = len as usize;
    for byte in mask.iter_mut().take(family.byte_len()) {
        let bits = remaining.min(8);
        // shifting a u8 by 8 overflows, so widen first
        *byte = ((0xFFu16 >> bits) ^ 0xFF) as u8;
        remaining -= bits;
    }
    Some(mask)
}

/// An IPv4 or IPv6 address as a fixed-width unsigned big-endian integer.
///
/// Ordering compares the family first and then the bytes, so within one family
/// it is plain numeric ordering.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    family: Family,
    octets: [u8; MAX_BYTES],
}

impl Address {
    pub fn family(&self) -> Family {
        self.family
    }

    /// The significant bytes (4 or 16).
    pub fn bytes(&self) -> &[u8] {
        &self.octets[..self.family.byte_len()]
    }

    /// Network address for a prefix length, host bits cleared.
    pub fn network(&self, len: u8) -> Option<Address> {
        let mask = get_cidr_mask(self.family, len)?;
        let mut octets = self.octets;
        for (byte, m) in octets.iter_mut().zip(mask.iter()) {
            *byte &= m;
        }
        Some(Address {
            family: self.family,
            octets,
        })
    }

    /// Last address for a prefix length, host bits set.
    pub fn broadcast(&self, len: u8) -> Option<Address> {
        let mask = get_cidr_mask(self.family, len)?;
        let mut octets = self.octets;
        for (byte, m) in octets.iter_mut().zip(mask.iter()).take(self.family.byte_len()) {
            *byte = (*byte & m) | !m;
        }
        Some(Address {
            family: self.family,
            octets,
        })
    }

    /// The next address, `None` past the top of the address space.
    pub fn successor(&self) -> Option<Address> {
        let mut octets = self.octets;
        for byte in octets[..self.family.byte_len()].iter_mut().rev() {
            let (sum, carry) = byte.overflowing_add(1);
            *byte = sum;
            if !carry {
                return Some(Address {
                    family: self.family,
                    octets,
                });
            }
        }
        None
    }

    /// `self - lower` as an unsigned count of addresses.
    ///
    /// Both addresses must share a family and `lower <= self`.
    pub fn distance_from(&self, lower: &Address) -> u128 {
        assert_eq!(
            self.family, lower.family,
            "distance between {} and {} should never happen.",
            self.family, lower.family
        );
        assert!(
            lower <= self,
            "lower[{}] > upper[{}] should never happen.",
            lower,
            self
        );
        let width = self.family.byte_len();
        let mut diff = [0u8; MAX_BYTES];
        let mut borrow = 0u16;
        for i in (0..width).rev() {
            let minuend = self.octets[i] as u16;
            let subtrahend = lower.octets[i] as u16 + borrow;
            if minuend >= subtrahend {
                diff[i] = (minuend - subtrahend) as u8;
                borrow = 0;
            } else {
                diff[i] = (minuend + 0x100 - subtrahend) as u8;
                borrow = 1;
            }
        }
        // right-align into a 16 byte big-endian integer
        let mut wide = [0u8; MAX_BYTES];
        wide[MAX_BYTES - width..].copy_from_slice(&diff[..width]);
        u128::from_be_bytes(wide)
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match self.family {
            Family::V4 => {
                let o = &self.octets;
                IpAddr::V4(Ipv4Addr::new(o[0], o[1], o[2], o[3]))
            }
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.octets)),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        let mut octets = [0u8; MAX_BYTES];
        let family = match ip {
            IpAddr::V4(v4) => {
                octets[..4].copy_from_slice(&v4.octets());
                Family::V4
            }
            IpAddr::V6(v6) => {
                octets.copy_from_slice(&v6.octets());
                Family::V6
            }
        };
        Address { family, octets }
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Address) -> Ordering {
        self.family
            .cmp(&other.family)
            .then_with(|| self.bytes().cmp(other.bytes()))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // pad() so width and alignment flags work on addresses
        f.pad(&self.to_ip_addr().to_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address({})", self.to_ip_addr())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
