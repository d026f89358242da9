//! Command line interface.

use crate::config;
use crate::index::MembershipIndex;
use crate::output::{format_classification, write_counts};
use crate::{build_index_from_file, summarize_records};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

/// Classify client addresses against a published set of relay egress ranges.
#[derive(Parser, Debug)]
#[command(name = "private-relay-summary", version, about)]
pub struct Cli {
    /// Egress range CSV (`range,country,region,city,` rows)
    #[arg(long, env = config::RANGES_FILE_ENV, default_value = config::DEFAULT_RANGES_FILE)]
    pub ranges: String,

    /// log4rs YAML configuration file
    #[arg(long, env = config::LOG_CONFIG_ENV, default_value = config::DEFAULT_LOG_CONFIG)]
    pub log_config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print `<address>\t<true|false>` for each address. Reads stdin when none are given.
    Classify { addresses: Vec<String> },
    /// Count JSON-lines traffic records per hour, site and relay flag (TSV output)
    Summarize {
        #[arg(long)]
        records: String,
        /// Lines held in memory per batch
        #[arg(long, env = config::CHUNK_LINES_ENV, default_value_t = config::DEFAULT_CHUNK_LINES)]
        chunk_lines: usize,
    },
    /// Print the shape of the built index as JSON
    Info,
}

/// Run a parsed command. `input` is only read by `classify` without arguments.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut out: W) -> Result<(), Box<dyn Error>> {
    log::info!("Loading ranges from {}", cli.ranges.on_blue());
    let index = build_index_from_file(&cli.ranges)?;

    match &cli.command {
        Commands::Classify { addresses } if addresses.is_empty() => {
            for line in input.lines() {
                let line = line?;
                writeln!(out, "{}", classify_line(&index, line.trim_end_matches('\r')))?;
            }
        }
        Commands::Classify { addresses } => {
            for raw in addresses {
                writeln!(out, "{}", classify_line(&index, raw))?;
            }
        }
        Commands::Summarize {
            records,
            chunk_lines,
        } => {
            let rows = summarize_records(&index, records, *chunk_lines)?;
            write_counts(&mut out, &rows)?;
        }
        Commands::Info => {
            let summary = index.summary();
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn classify_line(index: &MembershipIndex, raw: &str) -> String {
    format_classification(raw, index.contains_str(raw))
}
