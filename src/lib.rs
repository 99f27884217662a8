//! Business Analyzer Library
//!
//! A Rust library for answering aggregate questions about a municipal
//! registered business locations export.
//!
//! This library provides tools for:
//! - Parsing registry CSV exports whose quoted fields may contain commas
//! - Grouping business records by NAICS code in first-seen order
//! - Zip code, NAICS range and registry-wide summaries
//! - An interactive query shell with command history

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod business_registry;
        pub mod csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod history;
    pub mod logging;
    pub mod shell;
}

// Re-export commonly used types
pub use app::models::{CollectionStrategy, Group, Header, Record, Sequence};
pub use app::services::business_registry::{
    BusinessRegistry, CodeSummary, RegistrySummary, ZipSummary,
};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, Result};
