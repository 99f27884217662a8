//! Business registry grouped by NAICS code
//!
//! This module holds the loaded registry: the shared header plus the records
//! partitioned into groups of equal NAICS code, in the order each code first
//! appears in the source. The registry is built once and only read afterwards;
//! see [`query`] for the aggregate reports.

use crate::app::models::{CollectionStrategy, Group, Header, Record, Sequence};
use crate::app::services::csv_parser::{self, LoadStats, LoadedSource};
use crate::config::ColumnLayout;
use crate::error::{AnalyzerError, Result};
use std::path::Path;
use tracing::info;

pub mod grouping;
pub mod query;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use grouping::group_records;
pub use query::NaicsRange;
pub use report::{CodeSummary, RegistrySummary, ZipSummary};

/// Registry of business records grouped by NAICS code
#[derive(Debug, Clone)]
pub struct BusinessRegistry {
    /// Column names shared by every record
    pub(crate) header: Header,

    /// Groups in first-seen code order
    pub(crate) groups: Sequence<Group>,

    /// Positions of the queried columns
    pub(crate) layout: ColumnLayout,

    /// Statistics from the load that produced the records
    pub(crate) load_stats: LoadStats,
}

impl BusinessRegistry {
    /// Build a registry from full-width records
    ///
    /// Fails if the layout points outside the header or a record does not
    /// have one field per column.
    pub fn new(
        header: Header,
        records: Vec<Record>,
        layout: ColumnLayout,
        strategy: CollectionStrategy,
    ) -> Result<Self> {
        layout.validate(&header)?;

        if let Some((i, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| record.len() != header.len())
        {
            // Line numbers assume the header occupies line 1
            return Err(AnalyzerError::malformed_record(
                i + 2,
                header.len(),
                record.len(),
            ));
        }

        let groups = group_records(records, layout.naics_code, strategy);

        Ok(Self {
            header,
            groups,
            layout,
            load_stats: LoadStats::default(),
        })
    }

    /// Build a registry from a loaded source, keeping its statistics
    pub fn from_source(
        source: LoadedSource,
        layout: ColumnLayout,
        strategy: CollectionStrategy,
    ) -> Result<Self> {
        let mut registry = Self::new(source.header, source.records, layout, strategy)?;
        registry.load_stats = source.stats;
        Ok(registry)
    }

    /// Load and group a registry export from disk
    pub fn load(path: &Path, layout: ColumnLayout, strategy: CollectionStrategy) -> Result<Self> {
        let source = csv_parser::load(path)?;
        let registry = Self::from_source(source, layout, strategy)?;

        info!(
            "Grouped {} records into {} NAICS groups ({} storage)",
            registry.record_count(),
            registry.group_count(),
            strategy
        );

        Ok(registry)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn groups(&self) -> &Sequence<Group> {
        &self.groups
    }

    /// Every record, group by group
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.groups.iter().flat_map(|group| group.records().iter())
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn load_stats(&self) -> &LoadStats {
        &self.load_stats
    }

    pub fn strategy(&self) -> CollectionStrategy {
        self.groups.strategy()
    }
}
