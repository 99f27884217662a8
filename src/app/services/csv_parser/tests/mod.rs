//! Shared test utilities and fixtures for CSV parser tests

use std::fs;
use std::path::{Path, PathBuf};


/// Column names of a registered business locations export
pub const REGISTRY_COLUMNS: &[&str] = &[
    "Location Id",
    "Business Account Number",
    "Ownership Name",
    "DBA Name",
    "Street Address",
    "City",
    "State",
    "Mail Address",
    "Location Start Date",
    "Location End Date",
    "Business Start Date",
    "Business End Date",
    "Mail City",
    "Mail State",
    "Source Zipcode",
    "Parking Tax",
    "NAICS Code",
    "NAICS Code Description",
    "Transient Occupancy Tax",
    "LIC Code",
    "LIC Code Description",
    "Supervisor District",
    "Business Corridor",
    "Neighborhoods - Analysis Boundaries",
    "Business Location",
    "UniqueID",
];

/// Header line for a registry export
pub fn registry_header_line() -> String {
    REGISTRY_COLUMNS.join(",")
}

/// Build a full-width registry data line
///
/// The DBA name and business location carry quoted commas, as real exports do.
pub fn registry_line(
    naics: &str,
    zip: &str,
    neighborhood: &str,
    open: &str,
    close: &str,
) -> String {
    let mut fields: Vec<String> = (0..REGISTRY_COLUMNS.len())
        .map(|i| format!("v{}", i))
        .collect();
    fields[3] = "\"Corner Store, LLC\"".to_string();
    fields[8] = open.to_string();
    fields[9] = close.to_string();
    fields[14] = zip.to_string();
    fields[16] = naics.to_string();
    fields[23] = neighborhood.to_string();
    fields[24] = "\"POINT (-122.41, 37.77)\"".to_string();
    fields.join(",")
}

/// Write a registry file with the standard header and the given data lines
pub fn create_test_registry_file(dir: &Path, filename: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(filename);
    let mut content = registry_header_line();
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}
