//! Classify client addresses against a fixed set of relay egress ranges.
//!
//! The range list is loaded once into a [`MembershipIndex`], which groups
//! networks by netmask so a query costs one set probe per distinct netmask.
//! The index is immutable after construction and can be shared by any number
//! of threads.
//!
//! ```
//! use private_relay_summary::MembershipIndex;
//!
//! let index = MembershipIndex::from_cidrs(["203.0.113.0/24", "2001:db8::/32"]).unwrap();
//! assert!(index.contains_str("203.0.113.17"));
//! assert!(index.contains_str("2001:db8:1:2::5"));
//! assert!(!index.contains_str("not-an-ip"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, RangeLoadError};
pub use index::{IndexSummary, MembershipIndex};
pub use loader::{load_ranges, read_range_file, LoadedRanges};
pub use models::{IpFamily, NetworkRange};

use processing::{summarize_reader, BucketCount};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the egress range CSV and build the index from it.
pub fn build_index_from_file<P: AsRef<Path>>(path: P) -> Result<MembershipIndex, RangeLoadError> {
    let ranges = read_range_file(path)?;
    Ok(MembershipIndex::build(&ranges))
}

/// Classify every record in a JSON-lines traffic file and count the results
/// per hour, site and relay flag. The file is streamed `chunk_lines` lines
/// at a time.
pub fn summarize_records<P: AsRef<Path>>(
    index: &MembershipIndex,
    records_file: P,
    chunk_lines: usize,
) -> Result<Vec<BucketCount>, Box<dyn Error>> {
    let path = records_file.as_ref();
    let file = File::open(path)
        .map_err(|e| format!("Error opening records file {}: {e}", path.display()))?;
    log::info!("Reading traffic records from {}", path.display());
    summarize_reader(index, BufReader::new(file), chunk_lines)
}
