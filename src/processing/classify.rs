//! Per-record classification.
//!
//! Projects each traffic record down to the dimensions needed for counting
//! and attaches the relay flag from the shared index.

use super::records::{parse_record_line, NumberedLine};
use crate::index::MembershipIndex;
use crate::models::{TimeBucket, TrafficRecord};
use rayon::prelude::*;

/// A traffic record reduced to time bucket, site and relay flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedRecord {
    pub bucket: TimeBucket,
    pub site: String,
    pub is_relay: bool,
}

pub fn classify_record(index: &MembershipIndex, record: TrafficRecord) -> ClassifiedRecord {
    ClassifiedRecord {
        bucket: TimeBucket::from_timestamp(&record.ts),
        is_relay: index.contains_str(&record.ip),
        site: record.site,
    }
}

/// Parse and classify a chunk of JSON lines on the rayon pool. Output order
/// matches input order. Any unparseable line fails the chunk.
pub fn classify_lines(
    index: &MembershipIndex,
    lines: &[NumberedLine],
) -> Result<Vec<ClassifiedRecord>, String> {
    lines
        .par_iter()
        .map(|(line_no, line)| {
            parse_record_line(*line_no, line).map(|record| classify_record(index, record))
        })
        .collect()
}
