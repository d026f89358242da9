//! Tab separated output of bucket counts.

use crate::processing::BucketCount;
use std::error::Error;
use std::io::Write;

/// Write count rows, with a header, as tab separated values.
pub fn write_counts<W: Write>(writer: W, rows: &[BucketCount]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_writer(writer);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::debug!("Wrote {} count rows", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_counts() {
        let rows = vec![
            BucketCount {
                year: 2021,
                month: 8,
                day: 14,
                hour: 10,
                site: "en.wikipedia".to_string(),
                is_relay: false,
                count: 2,
            },
            BucketCount {
                year: 2021,
                month: 8,
                day: 14,
                hour: 10,
                site: "en.wikipedia".to_string(),
                is_relay: true,
                count: 1,
            },
        ];
        let mut out = Vec::new();
        write_counts(&mut out, &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "year\tmonth\tday\thour\tsite\tis_relay\tcount\n\
             2021\t8\t14\t10\ten.wikipedia\tfalse\t2\n\
             2021\t8\t14\t10\ten.wikipedia\ttrue\t1\n"
        );
    }

    #[test]
    fn test_write_counts_empty_has_no_header() {
        let mut out = Vec::new();
        write_counts(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
