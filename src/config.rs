//! Defaults and environment variable names.
//!
//! Every setting can come from the command line, the environment, or a
//! `.env` file in the working directory (loaded with `dotenv`).

/// Egress range CSV used when none is given.
pub const DEFAULT_RANGES_FILE: &str = "egress-ip-ranges.csv";
pub const RANGES_FILE_ENV: &str = "RELAY_RANGES_FILE";

/// log4rs YAML configuration. A console logger is used if the file is missing.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const LOG_CONFIG_ENV: &str = "RELAY_LOG_CONFIG";

/// Traffic record lines parsed and classified per batch by `summarize`.
pub const DEFAULT_CHUNK_LINES: usize = 100_000;
pub const CHUNK_LINES_ENV: &str = "RELAY_CHUNK_LINES";
