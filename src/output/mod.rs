//! Output formatting for classification results.
//!
//! - [`tsv`] - tab separated bucket counts
//! - [`terminal`] - one line per classified address

mod terminal;
mod tsv;

pub use terminal::format_classification;
pub use tsv::write_counts;
