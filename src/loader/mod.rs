//! Range loading.
//!
//! Turns CIDR strings into [`NetworkRange`] values split by family:
//! - [`load_ranges`] - in-memory list of CIDR strings
//! - [`read_range_file`] - the published egress range CSV

mod source;

pub use source::read_range_file;

use crate::error::{CidrError, RangeLoadError};
use crate::models::{split_cidr, IpFamily, NetworkRange};
use std::collections::HashSet;

/// Parsed ranges, partitioned by address family. Duplicates are removed,
/// first occurrence wins the position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedRanges {
    pub v4: Vec<NetworkRange>,
    pub v6: Vec<NetworkRange>,
}

impl LoadedRanges {
    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    /// All ranges, IPv4 first.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkRange> {
        self.v4.iter().chain(self.v6.iter())
    }
}

/// Parse every CIDR entry. The first malformed entry aborts the whole load.
///
/// # Arguments
/// * `entries` - CIDR strings such as `"203.0.113.0/24"` or `"2001:db8::/32"`
///
/// # Returns
/// * `Ok(LoadedRanges)` - all entries parsed and masked
/// * `Err(RangeLoadError::InvalidCidr)` - naming the 1-based position of the bad entry
pub fn load_ranges<I, S>(entries: I) -> Result<LoadedRanges, RangeLoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_positioned(
        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry)),
    )
}

pub(crate) fn load_positioned<I, S>(entries: I) -> Result<LoadedRanges, RangeLoadError>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    let mut loaded = LoadedRanges::default();
    let mut seen = HashSet::new();
    let mut total = 0usize;
    let mut masked = 0usize;

    for (position, entry) in entries {
        let entry = entry.as_ref();
        total += 1;

        let (range, host_bits_set) =
            parse_entry(entry).map_err(|source| RangeLoadError::InvalidCidr {
                position,
                entry: entry.to_string(),
                source,
            })?;

        if host_bits_set {
            masked += 1;
            log::debug!("entry #{position} '{entry}' has host bits set, using {range}");
        }

        if !seen.insert(range) {
            log::trace!("entry #{position} '{entry}' duplicates {range}");
            continue;
        }
        match range.version() {
            IpFamily::V4 => loaded.v4.push(range),
            IpFamily::V6 => loaded.v6.push(range),
        }
    }

    if masked > 0 {
        log::warn!("{masked} of {total} range entries had host bits set and were masked");
    }
    log::info!(
        "Loaded {total} range entries => {v4} IPv4 + {v6} IPv6 unique ranges",
        v4 = loaded.v4.len(),
        v6 = loaded.v6.len()
    );

    Ok(loaded)
}

/// Returns the range and whether masking changed the written address.
fn parse_entry(entry: &str) -> Result<(NetworkRange, bool), CidrError> {
    let (addr, prefix_len) = split_cidr(entry)?;
    let range = NetworkRange::new(addr, prefix_len)?;
    Ok((range, range.network_ip() != addr))
}
