//! Domain models for the relay range classifier.
//!
//! - [`NetworkRange`] - a parsed, pre-masked CIDR range
//! - [`IpFamily`] - IPv4 / IPv6 discriminator
//! - [`TrafficRecord`] and [`TimeBucket`] - traffic log input

mod ipv4;
mod ipv6;
mod network_range;
mod record;

// Re-export public types
pub use ipv4::{cut_addr, get_cidr_mask, MAX_LENGTH};
pub use ipv6::{cut_addr_v6, get_cidr_mask_v6, MAX_LENGTH_V6};
pub use network_range::{split_cidr, IpFamily, NetworkRange};
pub use record::{TimeBucket, TrafficRecord};
