//! Counting classified records per (time bucket, site, relay flag).

use super::ClassifiedRecord;
use crate::models::TimeBucket;
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

/// Number of records sharing a time bucket, site and relay flag.
///
/// Flat on purpose so it serializes straight into one delimited row.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BucketCount {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub site: String,
    pub is_relay: bool,
    pub count: u64,
}

type BucketKey = (TimeBucket, String, bool);

/// Running counts, fed one chunk of classified records at a time. Memory
/// grows with the number of distinct keys, not with the number of records.
#[derive(Debug, Default)]
pub struct BucketCounter {
    counts: HashMap<BucketKey, u64>,
    records: u64,
    relay: u64,
}

impl BucketCounter {
    pub fn add(&mut self, records: &[ClassifiedRecord]) {
        let chunk_counts = records
            .iter()
            .counts_by(|r| (r.bucket, r.site.as_str(), r.is_relay));

        for ((bucket, site, is_relay), count) in chunk_counts {
            *self
                .counts
                .entry((bucket, site.to_string(), is_relay))
                .or_default() += count as u64;
            if is_relay {
                self.relay += count as u64;
            }
        }
        self.records += records.len() as u64;
    }

    /// Records counted so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Records counted so far that came through a relay.
    pub fn relay_records(&self) -> u64 {
        self.relay
    }

    /// Rows sorted by bucket, then site, then relay flag (non-relay first).
    pub fn into_rows(self) -> Vec<BucketCount> {
        self.counts
            .into_iter()
            .sorted()
            .map(|((bucket, site, is_relay), count)| BucketCount {
                year: bucket.year,
                month: bucket.month,
                day: bucket.day,
                hour: bucket.hour,
                site,
                is_relay,
                count,
            })
            .collect()
    }
}
