//! Traffic record input (JSON lines).

use crate::models::TrafficRecord;
use std::io::{BufRead, Lines};
use std::iter::Enumerate;

/// A non-blank input line with its 1-based line number.
pub type NumberedLine = (usize, String);

/// Splits JSON-lines input into chunks of at most `chunk_lines` non-blank
/// lines, so a file of any size is held in memory one chunk at a time.
pub struct LineChunks<R> {
    lines: Enumerate<Lines<R>>,
    chunk_lines: usize,
}

impl<R: BufRead> LineChunks<R> {
    pub fn new(reader: R, chunk_lines: usize) -> LineChunks<R> {
        LineChunks {
            lines: reader.lines().enumerate(),
            chunk_lines: chunk_lines.max(1),
        }
    }
}

impl<R: BufRead> Iterator for LineChunks<R> {
    type Item = Result<Vec<NumberedLine>, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::new();
        while chunk.len() < self.chunk_lines {
            match self.lines.next() {
                None => break,
                Some((i, Err(e))) => return Some(Err(format!("Error reading line {}: {e}", i + 1))),
                Some((_, Ok(line))) if line.trim().is_empty() => continue,
                Some((i, Ok(line))) => chunk.push((i + 1, line)),
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(Ok(chunk))
        }
    }
}

/// Parse one JSON line into a [`TrafficRecord`].
///
/// A record whose `ip` is garbage is still a valid record; only broken JSON
/// or missing fields are errors here.
pub fn parse_record_line(line_no: usize, line: &str) -> Result<TrafficRecord, String> {
    let mut json_line_deserializer = serde_json::Deserializer::from_str(line);
    serde_path_to_error::deserialize(&mut json_line_deserializer).map_err(|e| {
        log::error!("LINE {line_no}: {line}");
        format!(
            "Error parsing record on line {line_no}: path={} error={}",
            e.path(),
            e
        )
    })
}
