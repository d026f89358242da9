//! Per-family lookup table: distinct netmask -> set of network addresses.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::ops::BitAnd;

/// Native integer form of an address (`u32` for IPv4, `u128` for IPv6).
pub trait AddressBits: Copy + Eq + Ord + Hash + BitAnd<Output = Self> {}

impl<T> AddressBits for T where T: Copy + Eq + Ord + Hash + BitAnd<Output = T> {}

/// Network addresses grouped by netmask.
///
/// Groups are kept in ascending netmask order, i.e. broadest prefix first.
/// Lookup cost is one masked set probe per distinct netmask.
#[derive(Debug, Clone)]
pub struct NetmaskGroups<A> {
    groups: Vec<(A, HashSet<A>)>,
}

impl<A: AddressBits> NetmaskGroups<A> {
    /// Build from `(netmask, network_address)` pairs. Order and repeats do not matter.
    pub fn from_pairs<I>(pairs: I) -> NetmaskGroups<A>
    where
        I: IntoIterator<Item = (A, A)>,
    {
        let mut by_mask: BTreeMap<A, HashSet<A>> = BTreeMap::new();
        for (netmask, network_address) in pairs {
            by_mask.entry(netmask).or_default().insert(network_address);
        }
        NetmaskGroups {
            groups: by_mask.into_iter().collect(),
        }
    }

    /// True when `addr & netmask` is a stored network for any netmask.
    #[inline]
    pub fn contains(&self, addr: A) -> bool {
        self.groups
            .iter()
            .any(|(netmask, networks)| networks.contains(&(addr & *netmask)))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct netmasks.
    pub fn netmask_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct `(netmask, network_address)` pairs.
    pub fn network_count(&self) -> usize {
        self.groups.iter().map(|(_, networks)| networks.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (A, &HashSet<A>)> {
        self.groups.iter().map(|(netmask, networks)| (*netmask, networks))
    }
}

impl<A: AddressBits> PartialEq for NetmaskGroups<A> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<A: AddressBits> Eq for NetmaskGroups<A> {}

impl<A> Default for NetmaskGroups<A> {
    fn default() -> Self {
        NetmaskGroups { groups: Vec::new() }
    }
}
