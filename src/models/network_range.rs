//! Parsed CIDR ranges.
//!
//! A [`NetworkRange`] carries its network address and netmask as native
//! integers of the family's width. The network address is always stored
//! pre-masked, so `network_address & netmask == network_address` holds for
//! every value this module hands out.

use super::ipv4::{cut_addr, get_cidr_mask, MAX_LENGTH};
use super::ipv6::{cut_addr_v6, get_cidr_mask_v6, MAX_LENGTH_V6};
use crate::error::CidrError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// IP address family. IPv4 and IPv6 spaces are disjoint and never cross-matched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn of(addr: &IpAddr) -> IpFamily {
        match addr {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// Address width in bits, which is also the longest valid prefix.
    pub fn max_prefix_len(self) -> u8 {
        match self {
            IpFamily::V4 => MAX_LENGTH,
            IpFamily::V6 => MAX_LENGTH_V6,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "4"),
            IpFamily::V6 => write!(f, "6"),
        }
    }
}

/// One CIDR entry, masked and split by family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NetworkRange {
    V4 { network_address: u32, netmask: u32 },
    V6 { network_address: u128, netmask: u128 },
}

impl NetworkRange {
    /// Build a range from any address inside it. Host bits are cleared here,
    /// whether or not the caller passed a canonical network address.
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<NetworkRange, CidrError> {
        match addr {
            IpAddr::V4(v4) => Ok(NetworkRange::V4 {
                network_address: cut_addr(v4, prefix_len)?,
                netmask: get_cidr_mask(prefix_len)?,
            }),
            IpAddr::V6(v6) => Ok(NetworkRange::V6 {
                network_address: cut_addr_v6(v6, prefix_len)?,
                netmask: get_cidr_mask_v6(prefix_len)?,
            }),
        }
    }

    pub fn version(&self) -> IpFamily {
        match self {
            NetworkRange::V4 { .. } => IpFamily::V4,
            NetworkRange::V6 { .. } => IpFamily::V6,
        }
    }

    pub fn prefix_len(&self) -> u8 {
        match self {
            NetworkRange::V4 { netmask, .. } => netmask.count_ones() as u8,
            NetworkRange::V6 { netmask, .. } => netmask.count_ones() as u8,
        }
    }

    /// Lowest address of the range.
    pub fn network_ip(&self) -> IpAddr {
        match *self {
            NetworkRange::V4 {
                network_address, ..
            } => IpAddr::V4(Ipv4Addr::from(network_address)),
            NetworkRange::V6 {
                network_address, ..
            } => IpAddr::V6(Ipv6Addr::from(network_address)),
        }
    }
}

/// Split a textual CIDR entry into its address and prefix length.
///
/// The family is picked from the text: anything containing ':' is read as
/// IPv6, everything else as dotted-decimal IPv4. An entry without `/len` is a
/// single host route (/32 or /128).
pub fn split_cidr(entry: &str) -> Result<(IpAddr, u8), CidrError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(CidrError::Empty);
    }

    let (addr_part, prefix_part) = match entry.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (entry, None),
    };

    let addr = if addr_part.contains(':') {
        addr_part.parse::<Ipv6Addr>().map(IpAddr::V6)
    } else {
        addr_part.parse::<Ipv4Addr>().map(IpAddr::V4)
    }
    .map_err(|_| CidrError::InvalidAddress(addr_part.to_string()))?;

    let max = IpFamily::of(&addr).max_prefix_len();
    let prefix_len = match prefix_part {
        Some(prefix) => parse_prefix_len(prefix)?,
        None => max,
    };
    if prefix_len > max {
        return Err(CidrError::PrefixTooLong {
            prefix: prefix_len,
            max,
        });
    }

    Ok((addr, prefix_len))
}

// Digits only: `u8::from_str` would also take a leading '+'.
fn parse_prefix_len(prefix: &str) -> Result<u8, CidrError> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrError::InvalidPrefix(prefix.to_string()));
    }
    prefix
        .parse::<u8>()
        .map_err(|_| CidrError::InvalidPrefix(prefix.to_string()))
}

impl FromStr for NetworkRange {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix_len) = split_cidr(s)?;
        NetworkRange::new(addr, prefix_len)
    }
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network_ip(), self.prefix_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_v4() {
        let range: NetworkRange = "203.0.113.0/24".parse().unwrap();
        assert_eq!(
            range,
            NetworkRange::V4 {
                network_address: 0xCB007100,
                netmask: 0xFFFFFF00
            }
        );
        assert_eq!(range.version(), IpFamily::V4);
        assert_eq!(range.prefix_len(), 24);
        assert_eq!(range.to_string(), "203.0.113.0/24");
    }

    #[test]
    fn test_parse_v6() {
        let range: NetworkRange = "2001:db8::/32".parse().unwrap();
        assert_eq!(range.version(), IpFamily::V6);
        assert_eq!(range.prefix_len(), 32);
        assert_eq!(range.network_ip(), ip("2001:db8::"));
        assert_eq!(range.to_string(), "2001:db8::/32");
    }

    #[test]
    fn test_host_bits_are_cleared() {
        let range: NetworkRange = "10.1.2.3/8".parse().unwrap();
        assert_eq!(range.network_ip(), ip("10.0.0.0"));
        assert_eq!(range.to_string(), "10.0.0.0/8");

        let range: NetworkRange = "2001:db8::1/64".parse().unwrap();
        assert_eq!(range.network_ip(), ip("2001:db8::"));
    }

    #[test]
    fn test_network_address_is_premasked() {
        for entry in [
            "0.0.0.0/0",
            "10.1.2.3/8",
            "172.16.5.4/12",
            "198.51.100.77/31",
            "::/0",
            "2001:db8:abcd::1/48",
            "fe80::1234/10",
            "2001:db8::ffff/127",
        ] {
            match entry.parse::<NetworkRange>().unwrap() {
                NetworkRange::V4 {
                    network_address,
                    netmask,
                } => assert_eq!(network_address & netmask, network_address, "{entry}"),
                NetworkRange::V6 {
                    network_address,
                    netmask,
                } => assert_eq!(network_address & netmask, network_address, "{entry}"),
            }
        }
    }

    #[test]
    fn test_bare_address_is_host_route() {
        let range: NetworkRange = "192.0.2.7".parse().unwrap();
        assert_eq!(range.prefix_len(), 32);
        assert_eq!(range.network_ip(), ip("192.0.2.7"));

        let range: NetworkRange = "2001:db8::7".parse().unwrap();
        assert_eq!(range.prefix_len(), 128);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let range: NetworkRange = "  172.16.0.0/12 \n".parse().unwrap();
        assert_eq!(range.to_string(), "172.16.0.0/12");
    }

    #[test]
    fn test_split_cidr_errors() {
        assert_eq!(split_cidr(""), Err(CidrError::Empty));
        assert_eq!(split_cidr("   "), Err(CidrError::Empty));
        assert_eq!(
            split_cidr("not-a-range/24"),
            Err(CidrError::InvalidAddress("not-a-range".to_string()))
        );
        assert_eq!(
            split_cidr("10.0.0/8"),
            Err(CidrError::InvalidAddress("10.0.0".to_string()))
        );
        assert_eq!(
            split_cidr("/24"),
            Err(CidrError::InvalidAddress("".to_string()))
        );
        assert_eq!(
            split_cidr("10.0.0.0/"),
            Err(CidrError::InvalidPrefix("".to_string()))
        );
        assert_eq!(
            split_cidr("10.0.0.0/+8"),
            Err(CidrError::InvalidPrefix("+8".to_string()))
        );
        assert_eq!(
            split_cidr("10.0.0.0/8/9"),
            Err(CidrError::InvalidPrefix("8/9".to_string()))
        );
        assert_eq!(
            split_cidr("10.0.0.0/300"),
            Err(CidrError::InvalidPrefix("300".to_string()))
        );
        assert_eq!(
            split_cidr("10.0.0.0/33"),
            Err(CidrError::PrefixTooLong {
                prefix: 33,
                max: 32
            })
        );
        assert_eq!(
            split_cidr("2001:db8::/129"),
            Err(CidrError::PrefixTooLong {
                prefix: 129,
                max: 128
            })
        );
    }

    #[test]
    fn test_family_display() {
        assert_eq!(IpFamily::V4.to_string(), "4");
        assert_eq!(IpFamily::V6.to_string(), "6");
        assert_eq!(IpFamily::of(&ip("::1")), IpFamily::V6);
    }
}
