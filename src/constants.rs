//! Application constants for the business analyzer
//!
//! This module contains the registry file conventions, default column
//! positions and the interactive shell vocabulary.

// =============================================================================
// Source File Format
// =============================================================================

/// Field delimiter used by registry exports
pub const FIELD_DELIMITER: char = ',';

/// Quote character toggling delimiter handling inside a field
pub const QUOTE_CHAR: char = '"';

/// Separator between the bounds of a NAICS range such as `4231-4239`
pub const RANGE_SEPARATOR: char = '-';

// =============================================================================
// Default Column Positions
// =============================================================================

/// Zero-based column positions in the registered business locations export
pub mod columns {
    /// Location start date (`MM/DD/YYYY`)
    pub const OPEN_DATE: usize = 8;

    /// Location end date, empty while the business is active
    pub const CLOSE_DATE: usize = 9;

    /// Source zip code
    pub const ZIP_CODE: usize = 14;

    /// NAICS code or NAICS range
    pub const NAICS_CODE: usize = 16;

    /// Analysis neighborhood
    pub const NEIGHBORHOOD: usize = 23;
}

// =============================================================================
// Interactive Shell
// =============================================================================

/// Prompt printed before each command is read
pub const DEFAULT_PROMPT: &str = "Command: ";

/// Shell command keywords, matched case-insensitively
pub mod commands {
    pub const QUIT: &str = "quit";
    pub const HISTORY: &str = "history";
    pub const ZIP: &str = "zip";
    pub const NAICS: &str = "naics";
    pub const SUMMARY: &str = "summary";

    pub const ZIP_USAGE: &str = "ZIP <zip>";
    pub const NAICS_USAGE: &str = "NAICS <code>";
}

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "business-analyzer";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
