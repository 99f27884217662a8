//! Aggregate report types and their console rendering

use std::fmt;

/// Businesses registered at one zip code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipSummary {
    pub zip: String,
    pub total: usize,
    /// Distinct NAICS codes
    pub business_types: usize,
    pub neighborhoods: usize,
}

/// Businesses in the NAICS group covering one code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSummary {
    pub total: usize,
    pub zip_codes: usize,
    pub neighborhoods: usize,
}

/// Registry-wide totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySummary {
    pub total: usize,
    pub closed: usize,
    /// Businesses that opened during the reference year
    pub new_last_year: usize,
}

impl fmt::Display for ZipSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Business Summary", self.zip)?;
        writeln!(f, "Total Businesses: {}", self.total)?;
        writeln!(f, "Business Types: {}", self.business_types)?;
        write!(f, "Neighborhood: {}", self.neighborhoods)
    }
}

impl fmt::Display for CodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Businesses: {}", self.total)?;
        writeln!(f, "Zip Codes: {}", self.zip_codes)?;
        write!(f, "Neighborhood: {}", self.neighborhoods)
    }
}

impl fmt::Display for RegistrySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Businesses: {}", self.total)?;
        writeln!(f, "Closed Businesses: {}", self.closed)?;
        write!(f, "New Business in last year: {}", self.new_last_year)
    }
}
