//! Membership index and classifier.
//!
//! [`MembershipIndex`] is built once from [`LoadedRanges`] and then only read.
//! It holds no interior mutability, so a single instance can be shared by
//! reference (or behind an `Arc`) across any number of worker threads.

mod netmask_groups;
mod summary;

pub use netmask_groups::{AddressBits, NetmaskGroups};
pub use summary::{FamilySummary, IndexSummary};

use crate::error::RangeLoadError;
use crate::loader::{load_ranges, LoadedRanges};
use crate::models::{IpFamily, NetworkRange};
use std::net::{IpAddr, Ipv6Addr};

/// Immutable lookup structure answering "is this address in any range?".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipIndex {
    v4: NetmaskGroups<u32>,
    v6: NetmaskGroups<u128>,
}

impl MembershipIndex {
    /// Group loaded ranges by netmask, per family.
    pub fn build(ranges: &LoadedRanges) -> MembershipIndex {
        let v4 = NetmaskGroups::from_pairs(ranges.iter().filter_map(|range| match *range {
            NetworkRange::V4 {
                network_address,
                netmask,
            } => Some((netmask, network_address)),
            NetworkRange::V6 { .. } => None,
        }));
        let v6 = NetmaskGroups::from_pairs(ranges.iter().filter_map(|range| match *range {
            NetworkRange::V6 {
                network_address,
                netmask,
            } => Some((netmask, network_address)),
            NetworkRange::V4 { .. } => None,
        }));

        let index = MembershipIndex { v4, v6 };
        log::info!("Built membership index: {}", index.summary());
        index
    }

    /// Parse `cidrs` and build the index. Any malformed entry fails the whole
    /// construction; no partial index is returned.
    pub fn from_cidrs<I, S>(cidrs: I) -> Result<MembershipIndex, RangeLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(MembershipIndex::build(&load_ranges(cidrs)?))
    }

    /// Classify a textual address. Anything that is not a valid IPv4 or IPv6
    /// address is simply not in the set.
    ///
    /// A zone-scoped IPv6 address (`fe80::1%eth0`) is classified by its
    /// address part.
    pub fn contains_str(&self, raw: &str) -> bool {
        match parse_query(raw) {
            Some(ip) => self.contains_addr(ip),
            None => false,
        }
    }

    pub fn contains_addr(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => self.contains_v4(u32::from(v4)),
            IpAddr::V6(v6) => self.contains_v6(u128::from(v6)),
        }
    }

    /// Classify an already-parsed address given as integer plus family.
    /// A value too wide for IPv4 is not an IPv4 address and never matches.
    pub fn contains_numeric(&self, family: IpFamily, addr: u128) -> bool {
        match family {
            IpFamily::V4 => u32::try_from(addr).is_ok_and(|v4| self.contains_v4(v4)),
            IpFamily::V6 => self.contains_v6(addr),
        }
    }

    #[inline]
    pub fn contains_v4(&self, addr: u32) -> bool {
        self.v4.contains(addr)
    }

    #[inline]
    pub fn contains_v6(&self, addr: u128) -> bool {
        self.v6.contains(addr)
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            v4: FamilySummary {
                netmasks: self.v4.netmask_count(),
                networks: self.v4.network_count(),
                prefix_lengths: self.v4.iter().map(|(m, _)| m.count_ones() as u8).collect(),
            },
            v6: FamilySummary {
                netmasks: self.v6.netmask_count(),
                networks: self.v6.network_count(),
                prefix_lengths: self.v6.iter().map(|(m, _)| m.count_ones() as u8).collect(),
            },
        }
    }
}

// The zone must be non-empty and may not contain another '%'.
fn parse_query(raw: &str) -> Option<IpAddr> {
    match raw.split_once('%') {
        None => raw.parse().ok(),
        Some((addr, zone)) if addr.contains(':') && !zone.is_empty() && !zone.contains('%') => {
            addr.parse::<Ipv6Addr>().ok().map(IpAddr::V6)
        }
        Some(_) => None,
    }
}
