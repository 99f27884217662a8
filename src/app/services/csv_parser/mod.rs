//! CSV parser for business registry exports
//!
//! This module turns a registry export into full-width records. The design
//! follows the minimal quoting used by the exports: double quotes toggle
//! delimiter handling and are kept in the field text.
//!
//! ## Architecture
//!
//! - [`line_parser`] - Quote-aware splitting of individual lines
//! - [`loader`] - File and reader loading with malformed-line skipping
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use business_analyzer::app::services::csv_parser;
//!
//! # fn example() -> business_analyzer::Result<()> {
//! let source = csv_parser::load(std::path::Path::new("registry.csv"))?;
//!
//! println!("Loaded {} records with {} columns",
//!          source.stats.records_loaded,
//!          source.header.len());
//! # Ok(())
//! # }
//! ```

pub mod line_parser;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_parser::{parse_header, parse_record, split_quoted};
pub use loader::{load, load_from_reader};
pub use stats::{LoadStats, LoadedSource};
