//! Traffic record processing around the classifier.
//!
//! - [`records`] - reading JSON-lines traffic records in chunks
//! - [`classify`] - per-record relay classification
//! - [`aggregate`] - counting classified records per bucket

mod aggregate;
mod classify;
mod records;

// Re-export public functions
pub use aggregate::{BucketCount, BucketCounter};
pub use classify::{classify_lines, classify_record, ClassifiedRecord};
pub use records::{parse_record_line, LineChunks, NumberedLine};

use crate::index::MembershipIndex;
use std::error::Error;
use std::io::BufRead;

/// Stream JSON-lines traffic records from `reader` and count them per hour,
/// site and relay flag.
///
/// At most `chunk_lines` lines are held in memory at once; each chunk is
/// parsed and classified in parallel, then folded into the running counts.
pub fn summarize_reader<R: BufRead>(
    index: &MembershipIndex,
    reader: R,
    chunk_lines: usize,
) -> Result<Vec<BucketCount>, Box<dyn Error>> {
    let mut counter = BucketCounter::default();

    for chunk in LineChunks::new(reader, chunk_lines) {
        let chunk = chunk?;
        let classified = classify_lines(index, &chunk)?;
        counter.add(&classified);
        log::debug!("{} records counted", counter.records());
    }

    log::info!(
        "Classified {} records, {} via relay",
        counter.records(),
        counter.relay_records()
    );
    let rows = counter.into_rows();
    log::debug!("Grouped into {} rows", rows.len());
    Ok(rows)
}
