//! Load statistics and result structures for registry sources
//!
//! This module provides types for tracking how many lines were read, how
//! many became records and why the others were skipped.

use crate::app::models::{Header, Record};

/// Everything read from a registry source
#[derive(Debug, Clone)]
pub struct LoadedSource {
    /// Column names from the first line
    pub header: Header,

    /// Records in file order
    pub records: Vec<Record>,

    /// Load statistics
    pub stats: LoadStats,
}

/// Simple load statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data lines read after the header, blank lines included
    pub lines_read: usize,

    /// Number of records accepted
    pub records_loaded: usize,

    /// Number of lines rejected as malformed
    pub records_skipped: usize,

    /// Number of blank lines ignored
    pub blank_lines: usize,

    /// Rejection messages for diagnostics
    pub errors: Vec<String>,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of non-blank lines that became records
    pub fn success_rate(&self) -> f64 {
        let candidates = self.records_loaded + self.records_skipped;
        if candidates == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / candidates as f64) * 100.0
        }
    }

    /// Whether every non-blank line became a record
    pub fn is_clean(&self) -> bool {
        self.records_skipped == 0
    }
}
