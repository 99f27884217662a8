//! Error handling for registry loading and query operations.
//!
//! Provides error types with context for source file access, record
//! parsing, configuration and the interactive query commands.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source file unavailable: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file has no header line: {path}")]
    EmptySource { path: PathBuf },

    #[error("Malformed record on line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' is configured at index {index} but the header has {width} columns")]
    ColumnOutOfRange {
        column: &'static str,
        index: usize,
        width: usize,
    },

    #[error("No NAICS group covers code {code}")]
    NoMatchingGroup { code: i64 },

    #[error("Invalid NAICS code '{code}': expected an integer")]
    InvalidCode { code: String },

    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AnalyzerError {
    /// Create a source unavailable error for the given path
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(line: usize, expected: usize, found: usize) -> Self {
        Self::MalformedRecord {
            line,
            expected,
            found,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the interactive shell can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoMatchingGroup { .. }
                | Self::InvalidCode { .. }
                | Self::MissingArgument { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
