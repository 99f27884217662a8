//! Configuration management and validation.
//!
//! Provides the column layout used to read registry records and the
//! interactive shell settings. Configuration is layered: built-in defaults,
//! then an optional TOML file, then command-line overrides.

use crate::app::models::Header;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PROMPT, columns};
use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Positions of the columns the query engine reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub open_date: usize,
    pub close_date: usize,
    pub zip_code: usize,
    pub naics_code: usize,
    pub neighborhood: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            open_date: columns::OPEN_DATE,
            close_date: columns::CLOSE_DATE,
            zip_code: columns::ZIP_CODE,
            naics_code: columns::NAICS_CODE,
            neighborhood: columns::NEIGHBORHOOD,
        }
    }
}

impl ColumnLayout {
    /// Named column positions, for validation and diagnostics
    pub fn entries(&self) -> [(&'static str, usize); 5] {
        [
            ("open_date", self.open_date),
            ("close_date", self.close_date),
            ("zip_code", self.zip_code),
            ("naics_code", self.naics_code),
            ("neighborhood", self.neighborhood),
        ]
    }

    /// Check every configured column exists in the header
    pub fn validate(&self, header: &Header) -> Result<()> {
        for (column, index) in self.entries() {
            if index >= header.len() {
                return Err(AnalyzerError::ColumnOutOfRange {
                    column,
                    index,
                    width: header.len(),
                });
            }
            debug!(
                "Column {} -> index {} ({})",
                column,
                index,
                header.name(index).unwrap_or_default()
            );
        }
        Ok(())
    }
}

/// Interactive shell settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Text printed before each command is read
    pub prompt: String,

    /// Maximum number of remembered commands (None = unbounded)
    pub history_limit: Option<usize>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_limit: None,
        }
    }
}

/// Top-level analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub columns: ColumnLayout,
    pub shell: ShellConfig,
}

impl AnalyzerConfig {
    /// Default config file location under the platform config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalyzerError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            AnalyzerError::configuration(format!("In '{}': {}", path.display(), e))
        })
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AnalyzerError::configuration(format!("Invalid TOML: {}", e)))
    }

    /// Resolve the configuration layers
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AnalyzerError::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            debug!("Using config file: {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_config_path().filter(|path| path.exists()) {
            Some(path) => {
                debug!("Using config file: {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Override the history bound
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.shell.history_limit = Some(limit);
        self
    }

    /// Validate settings against a loaded header
    pub fn validate(&self, header: &Header) -> Result<()> {
        if self.shell.prompt.is_empty() {
            return Err(AnalyzerError::configuration("Shell prompt cannot be empty"));
        }
        if self.shell.history_limit == Some(0) {
            return Err(AnalyzerError::configuration(
                "History limit must be greater than 0",
            ));
        }
        self.columns.validate(header)
    }
}
