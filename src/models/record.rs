//! Traffic log records fed through the classifier.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Deserialize;
use std::fmt;

/// One request from the traffic log.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TrafficRecord {
    /// Request time.
    pub ts: DateTime<Utc>,
    /// Site identifier, e.g. `en.wikipedia`.
    pub site: String,
    /// Client address as logged. May be malformed.
    pub ip: String,
}

/// Hourly time bucket used to group classified records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeBucket {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl TimeBucket {
    pub fn from_timestamp(ts: &DateTime<Utc>) -> TimeBucket {
        TimeBucket {
            year: ts.year(),
            month: ts.month(),
            day: ts.day(),
            hour: ts.hour(),
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}",
            self.year, self.month, self.day, self.hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json() {
        let json = r#"{"ts":"2021-08-14T10:42:07Z","site":"en.wikipedia","ip":"203.0.113.17"}"#;
        let record: TrafficRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.site, "en.wikipedia");
        assert_eq!(record.ip, "203.0.113.17");

        let bucket = TimeBucket::from_timestamp(&record.ts);
        assert_eq!(
            bucket,
            TimeBucket {
                year: 2021,
                month: 8,
                day: 14,
                hour: 10
            }
        );
        assert_eq!(bucket.to_string(), "2021-08-14T10");
    }

    #[test]
    fn test_offset_timestamp_is_bucketed_in_utc() {
        let json = r#"{"ts":"2021-08-14T01:30:00+02:00","site":"cs.wikipedia","ip":"x"}"#;
        let record: TrafficRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            TimeBucket::from_timestamp(&record.ts).to_string(),
            "2021-08-13T23"
        );
    }

    #[test]
    fn test_bucket_ordering() {
        let a = TimeBucket {
            year: 2021,
            month: 8,
            day: 13,
            hour: 23,
        };
        let b = TimeBucket {
            year: 2021,
            month: 8,
            day: 14,
            hour: 0,
        };
        assert!(a < b);
    }
}
