//! Aggregate queries over the grouped registry
//!
//! This module provides the three read-only reports: businesses by zip code,
//! businesses in the NAICS range covering a code, and the registry-wide
//! new/closed/total summary.

use super::BusinessRegistry;
use super::report::{CodeSummary, RegistrySummary, ZipSummary};
use crate::app::models::Group;
use crate::constants::RANGE_SEPARATOR;
use crate::error::{AnalyzerError, Result};
use chrono::{Datelike, Local};
use std::collections::HashSet;
use tracing::debug;

/// Inclusive numeric NAICS range written as `low-high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaicsRange {
    pub low: i64,
    pub high: i64,
}

impl NaicsRange {
    /// Parse `low-high`; plain codes and non-numeric bounds are not ranges
    ///
    /// Only the first two dash-separated pieces are read, so `100-200-300`
    /// covers 100 through 200.
    pub fn parse(code: &str) -> Option<Self> {
        let mut bounds = code.split(RANGE_SEPARATOR);
        let (low, high) = (bounds.next()?, bounds.next()?);
        Some(Self {
            low: low.trim().parse().ok()?,
            high: high.trim().parse().ok()?,
        })
    }

    pub fn contains(&self, code: i64) -> bool {
        self.low <= code && code <= self.high
    }
}

impl BusinessRegistry {
    /// Count businesses whose zip code matches, ignoring surrounding whitespace
    ///
    /// A zip code with no businesses yields an all-zero summary.
    pub fn zip_summary(&self, zip: &str) -> ZipSummary {
        let zip = zip.trim();
        let mut total = 0;
        let mut business_types = HashSet::new();
        let mut neighborhoods = HashSet::new();

        for record in self.records() {
            if record.field(self.layout.zip_code).trim() == zip {
                total += 1;
                business_types.insert(record.field(self.layout.naics_code));
                neighborhoods.insert(record.field(self.layout.neighborhood));
            }
        }

        ZipSummary {
            zip: zip.to_string(),
            total,
            business_types: business_types.len(),
            neighborhoods: neighborhoods.len(),
        }
    }

    /// Find the first group whose NAICS range contains `code`
    ///
    /// Groups with a plain (non-range) code never match.
    pub fn find_group_for_code(&self, code: i64) -> Option<&Group> {
        self.groups.iter().find(|group| {
            let group_code = group.representative().field(self.layout.naics_code);
            match NaicsRange::parse(group_code) {
                Some(range) => range.contains(code),
                None => {
                    if group_code.contains(RANGE_SEPARATOR) {
                        debug!("Ignoring malformed NAICS range '{}'", group_code);
                    }
                    false
                }
            }
        })
    }

    /// Summarise the NAICS group whose range covers `code`
    pub fn code_summary(&self, code: &str) -> Result<CodeSummary> {
        let numeric: i64 = code.trim().parse().map_err(|_| AnalyzerError::InvalidCode {
            code: code.to_string(),
        })?;

        let group = self
            .find_group_for_code(numeric)
            .ok_or(AnalyzerError::NoMatchingGroup { code: numeric })?;

        let mut zip_codes = HashSet::new();
        let mut neighborhoods = HashSet::new();
        for record in group.records() {
            zip_codes.insert(record.field(self.layout.zip_code));
            neighborhoods.insert(record.field(self.layout.neighborhood));
        }

        Ok(CodeSummary {
            total: group.len(),
            zip_codes: zip_codes.len(),
            neighborhoods: neighborhoods.len(),
        })
    }

    /// Registry-wide totals relative to the previous calendar year
    pub fn summary(&self) -> RegistrySummary {
        self.summary_for_year(Local::now().year() - 1)
    }

    /// Registry-wide totals, counting businesses opened in `year` as new
    ///
    /// An open date is matched by its trailing four-digit year. Closed and
    /// new are counted independently, so a business can be both.
    pub fn summary_for_year(&self, year: i32) -> RegistrySummary {
        let year_suffix = format!("{:04}", year);
        let mut summary = RegistrySummary {
            total: 0,
            closed: 0,
            new_last_year: 0,
        };

        for record in self.records() {
            summary.total += 1;
            if record.field(self.layout.open_date).ends_with(&year_suffix) {
                summary.new_last_year += 1;
            }
            if !record.field(self.layout.close_date).trim().is_empty() {
                summary.closed += 1;
            }
        }

        summary
    }
}
