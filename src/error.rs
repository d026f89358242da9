use thiserror::Error;

/// Reasons a single CIDR entry can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("entry is empty")]
    Empty,
    #[error("invalid IP address '{0}'")]
    InvalidAddress(String),
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),
    #[error("prefix length /{prefix} is longer than {max} bits")]
    PrefixTooLong { prefix: u8, max: u8 },
}

/// Failure while loading the range set. Loading is all-or-nothing, so any
/// of these means no index was built.
#[derive(Error, Debug)]
pub enum RangeLoadError {
    #[error("range entry #{position} '{entry}': {source}")]
    InvalidCidr {
        /// 1-based position of the entry (line number when read from a file).
        position: usize,
        entry: String,
        #[source]
        source: CidrError,
    },
    #[error("unable to open range file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read range file {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}
