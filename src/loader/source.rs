//! Egress range CSV source.
//!
//! The published file has no header and one range per row:
//! `range,country,region,city,`. Only the first column matters here, the
//! geographic columns are dropped before parsing.

use super::{load_positioned, LoadedRanges};
use crate::error::RangeLoadError;
use std::fs::File;
use std::path::Path;

/// Read and parse the egress range CSV at `path`.
///
/// Blank rows and rows starting with `#` are skipped. Errors report the CSV
/// line number of the offending row.
pub fn read_range_file<P: AsRef<Path>>(path: P) -> Result<LoadedRanges, RangeLoadError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    log::info!("Reading range file: {path_str}");

    let file = File::open(path).map_err(|source| RangeLoadError::Io {
        path: path_str.clone(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| RangeLoadError::Csv {
            path: path_str.clone(),
            source,
        })?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        match record.get(0) {
            Some(range) if !range.is_empty() => entries.push((line, range.to_string())),
            _ => log::trace!("skipping empty row at line {line}"),
        }
    }
    log::debug!("{} range rows in {path_str}", entries.len());

    load_positioned(entries)
}
