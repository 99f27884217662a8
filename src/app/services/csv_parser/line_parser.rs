//! Quote-aware line splitting for registry CSV exports
//!
//! Registry exports quote only the fields that contain a comma, and never
//! escape quotes inside a field. Splitting therefore follows a simple toggle:
//! every `"` flips the in-quotes state and is kept in the field text, and a
//! delimiter only ends a field while outside quotes.

use crate::app::models::{Header, Record};
use crate::constants::{FIELD_DELIMITER, QUOTE_CHAR};
use crate::error::{AnalyzerError, Result};

/// Split one line into fields, honouring quoted delimiters
///
/// Quote characters are preserved in the output. An unbalanced quote is not
/// an error: the last field absorbs the remainder of the line.
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == QUOTE_CHAR {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == FIELD_DELIMITER && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    fields
}

/// Parse a data line into a record with exactly `expected` fields
///
/// `line_number` is the 1-based position in the source file and is only used
/// for error reporting.
pub fn parse_record(line: &str, line_number: usize, expected: usize) -> Result<Record> {
    let fields = split_quoted(line);
    if fields.len() != expected {
        return Err(AnalyzerError::malformed_record(
            line_number,
            expected,
            fields.len(),
        ));
    }
    Ok(Record::new(fields))
}

/// Parse the header line
///
/// Column names are never quoted in registry exports, so this is a plain
/// split on the delimiter. A leading byte order mark is dropped.
pub fn parse_header(line: &str) -> Header {
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    Header::new(line.split(FIELD_DELIMITER).map(str::to_string).collect())
}
