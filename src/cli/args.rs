//! Command-line argument definitions for the business analyzer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::CollectionStrategy;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the business analyzer
///
/// Loads a registry export, groups it by NAICS code and answers ZIP, NAICS
/// and Summary queries at an interactive prompt.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "business-analyzer",
    version,
    about = "Interactive zip code and NAICS summaries over a business registry CSV export",
    long_about = "Loads a registered business locations export, groups the records by NAICS code \
                  and answers queries at an interactive prompt:\n\n  \
                  ZIP <zip>       businesses, types and neighborhoods in a zip code\n  \
                  NAICS <code>    businesses, zip codes and neighborhoods for a NAICS code\n  \
                  Summary         total, closed and last year's new businesses\n  \
                  history         commands entered so far\n  \
                  quit            leave the prompt"
)]
pub struct Args {
    /// Path to the registry CSV export
    #[arg(value_name = "CSV_PATH")]
    pub csv_path: PathBuf,

    /// Collection structure: AL (array list) or LL (linked list)
    ///
    /// Only affects how records are held in memory; query results are the
    /// same for both.
    #[arg(value_name = "AL|LL", value_enum, ignore_case = true)]
    pub structure: CollectionStrategy,

    /// Configuration file (TOML)
    ///
    /// Defaults to business-analyzer/config.toml under the platform config
    /// directory when that file exists.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Maximum number of commands kept in history
    #[arg(long = "history-limit", value_name = "N")]
    pub history_limit: Option<usize>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == Some(0) {
            return Err(AnalyzerError::configuration(
                "History limit must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Get the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Load the layered configuration and apply argument overrides
    pub fn load_config(&self) -> Result<AnalyzerConfig> {
        let config = AnalyzerConfig::load_layered(self.config_file.as_deref())?;

        Ok(match self.history_limit {
            Some(limit) => config.with_history_limit(limit),
            None => config,
        })
    }
}
