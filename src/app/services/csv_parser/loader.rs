//! Registry source loading
//!
//! Reads the header line and every data line of a registry export, turning
//! each data line into a [`Record`](crate::app::models::Record). Lines whose
//! field count does not match the header are skipped and reported, so the
//! records handed to the grouping stage are always full width.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::line_parser::{parse_header, parse_record};
use super::stats::{LoadStats, LoadedSource};
use crate::error::{AnalyzerError, Result};

/// Load a registry export from disk
pub fn load(path: &Path) -> Result<LoadedSource> {
    let file = File::open(path).map_err(|e| AnalyzerError::source_unavailable(path, e))?;
    debug!("Opened registry source {}", path.display());
    load_from_reader(BufReader::new(file), path)
}

/// Load a registry export from any buffered reader
///
/// `source` names the origin in errors and log messages. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
pub fn load_from_reader<R: BufRead>(mut reader: R, source: &Path) -> Result<LoadedSource> {
    let start_time = Instant::now();
    let mut buf = Vec::new();

    let header = match read_line(&mut reader, &mut buf, source)? {
        Some(line) => parse_header(&line),
        None => {
            return Err(AnalyzerError::EmptySource {
                path: source.to_path_buf(),
            });
        }
    };
    debug!("Header has {} columns", header.len());

    let mut stats = LoadStats::new();
    let mut records = Vec::new();
    let mut line_number = 1;

    while let Some(line) = read_line(&mut reader, &mut buf, source)? {
        line_number += 1;
        stats.lines_read += 1;

        if line.trim().is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        match parse_record(&line, line_number, header.len()) {
            Ok(record) => {
                records.push(record);
                stats.records_loaded += 1;
            }
            Err(e) => {
                warn!("Skipping record in {}: {}", source.display(), e);
                stats.records_skipped += 1;
                stats.errors.push(e.to_string());
            }
        }
    }

    info!(
        "Loaded {} records from {} ({} skipped) in {:.2?}",
        stats.records_loaded,
        source.display(),
        stats.records_skipped,
        start_time.elapsed()
    );

    Ok(LoadedSource {
        header,
        records,
        stats,
    })
}

/// Read one line without its terminator, or None at end of input
fn read_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    source: &Path,
) -> Result<Option<String>> {
    buf.clear();
    let read = reader
        .read_until(b'\n', buf)
        .map_err(|e| AnalyzerError::source_unavailable(source, e))?;
    if read == 0 {
        return Ok(None);
    }

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
