//! Shared test utilities and fixtures for business registry tests

use crate::app::models::{CollectionStrategy, Header, Record};
use crate::app::services::business_registry::BusinessRegistry;
use crate::config::ColumnLayout;


/// Width of a registry export row
pub const WIDTH: usize = 26;

/// Create a header matching the default column layout
pub fn create_test_header() -> Header {
    Header::new((0..WIDTH).map(|i| format!("column_{}", i)).collect())
}

/// Create a full-width business record with the queried fields set
pub fn create_test_business(
    naics: &str,
    zip: &str,
    neighborhood: &str,
    open: &str,
    close: &str,
) -> Record {
    let layout = ColumnLayout::default();
    let mut fields = vec![String::new(); WIDTH];
    fields[layout.naics_code] = naics.to_string();
    fields[layout.zip_code] = zip.to_string();
    fields[layout.neighborhood] = neighborhood.to_string();
    fields[layout.open_date] = open.to_string();
    fields[layout.close_date] = close.to_string();
    Record::new(fields)
}

/// Records spread over three NAICS groups and three zip codes
pub fn create_test_businesses() -> Vec<Record> {
    vec![
        create_test_business("4400-4599", "94110", "Mission", "01/15/2023", ""),
        create_test_business("7220-7229", "94103", "South of Market", "03/01/2019", ""),
        create_test_business("4400-4599", "94103", "South of Market", "06/30/2023", "12/31/2024"),
        create_test_business("5210-5239", "94110", "Bernal Heights", "09/09/2015", "01/01/2020"),
        create_test_business("7220-7229", "94110", "Mission", "02/02/2024", ""),
        create_test_business("4400-4599", " 94110 ", "Mission", "11/11/2011", "  "),
    ]
}

/// Create a registry over [`create_test_businesses`]
pub fn create_test_registry(strategy: CollectionStrategy) -> BusinessRegistry {
    BusinessRegistry::new(
        create_test_header(),
        create_test_businesses(),
        ColumnLayout::default(),
        strategy,
    )
    .unwrap()
}

/// Create a registry from arbitrary records with the default layout
pub fn create_registry_from(records: Vec<Record>) -> BusinessRegistry {
    BusinessRegistry::new(
        create_test_header(),
        records,
        ColumnLayout::default(),
        CollectionStrategy::Array,
    )
    .unwrap()
}
