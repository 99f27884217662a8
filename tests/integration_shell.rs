//! Integration tests for the interactive shell over a registry export on disk
//!
//! These tests write a small registry export, load it through the public API
//! and drive the shell with scripted input, checking the exact console text.

use business_analyzer::cli::shell::Shell;
use business_analyzer::config::{AnalyzerConfig, ColumnLayout, ShellConfig};
use business_analyzer::{BusinessRegistry, CollectionStrategy};
use chrono::{Datelike, Local};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WIDTH: usize = 26;

/// Build a registry data line with quoted commas in the name and location
fn business_line(naics: &str, zip: &str, neighborhood: &str, open: &str, close: &str) -> String {
    let mut fields: Vec<String> = (0..WIDTH).map(|i| format!("f{}", i)).collect();
    fields[3] = "\"Bakery, Cafe & Bar\"".to_string();
    fields[8] = open.to_string();
    fields[9] = close.to_string();
    fields[14] = zip.to_string();
    fields[16] = naics.to_string();
    fields[23] = neighborhood.to_string();
    fields[24] = "\"(37.76, -122.42)\"".to_string();
    fields.join(",")
}

fn create_registry_file(dir: &Path) -> PathBuf {
    let last_year = Local::now().year() - 1;
    let header: Vec<String> = (0..WIDTH).map(|i| format!("Column {}", i)).collect();

    let lines = [
        header.join(","),
        business_line("4400-4599", "94110", "Mission", &format!("03/04/{}", last_year), ""),
        business_line("7220-7229", "94110", "Mission", "01/01/2010", "06/30/2021"),
        business_line("4400-4599", "94103", "South of Market", "05/05/2015", ""),
        "short,line".to_string(),
        business_line(
            "7220-7229",
            "94110",
            "Bernal Heights",
            &format!("12/12/{}", last_year),
            &format!("12/13/{}", last_year),
        ),
        business_line("5413", "94110", "Mission", "02/02/2002", ""),
    ];

    let path = dir.join("registry.csv");
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}

fn run_shell(registry: &BusinessRegistry, input: &str) -> String {
    colored::control::set_override(false);

    let mut output = Vec::new();
    Shell::new(registry, &ShellConfig::default())
        .run(Cursor::new(input.to_string()), &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

/// Test the registry loads through the public API and skips the short line
///
/// Purpose: Validate load statistics and grouping on a file with a malformed row
/// Benefit: Ensures queries never see records narrower than the header
#[test]
fn test_load_registry_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_registry_file(temp_dir.path());

    let registry =
        BusinessRegistry::load(&path, ColumnLayout::default(), CollectionStrategy::Array).unwrap();

    assert_eq!(registry.header().len(), WIDTH);
    assert_eq!(registry.record_count(), 5);
    assert_eq!(registry.group_count(), 3);
    assert_eq!(registry.load_stats().records_skipped, 1);
    assert!(
        registry
            .records()
            .all(|record| record.len() == WIDTH)
    );
}

/// Test a scripted session covering every command
///
/// Purpose: Validate report formats, error reporting and history ordering
/// Benefit: Guards the console text that downstream scripts depend on
#[test]
fn test_scripted_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_registry_file(temp_dir.path());
    let registry =
        BusinessRegistry::load(&path, ColumnLayout::default(), CollectionStrategy::Linked).unwrap();

    let output = run_shell(
        &registry,
        "ZIP 94110\nnaics 7221\nNAICS 5413\nZIP\nSummary\nhistory\nquit\nSummary\n",
    );

    let expected = "\
Command: 94110 Business Summary
Total Businesses: 4
Business Types: 3
Neighborhood: 2
Command: Total Businesses: 2
Zip Codes: 1
Neighborhood: 2
Command: Error: No NAICS group covers code 5413
Command: Error: Missing argument. Usage: ZIP <zip>
Command: Total Businesses: 5
Closed Businesses: 2
New Business in last year: 2
Command: ZIP 94110
naics 7221
NAICS 5413
ZIP
Summary
Command: ";

    assert_eq!(output, expected);
}

/// Test that end of input leaves the shell like quit
#[test]
fn test_end_of_input_ends_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_registry_file(temp_dir.path());
    let registry =
        BusinessRegistry::load(&path, ColumnLayout::default(), CollectionStrategy::Array).unwrap();

    let output = run_shell(&registry, "ZIP 00000");

    assert_eq!(
        output,
        concat!(
            "Command: 00000 Business Summary\n",
            "Total Businesses: 0\nBusiness Types: 0\nNeighborhood: 0\n",
            "Command: \n",
        )
    );
}

/// Test that both storage strategies print byte-identical sessions
#[test]
fn test_strategies_print_identical_reports() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_registry_file(temp_dir.path());
    let script = "ZIP 94110\nZIP 94103\nNAICS 4500\nNAICS 7229\nSummary\nhistory\nquit\n";

    let array =
        BusinessRegistry::load(&path, ColumnLayout::default(), CollectionStrategy::Array).unwrap();
    let linked =
        BusinessRegistry::load(&path, ColumnLayout::default(), CollectionStrategy::Linked).unwrap();

    assert_eq!(run_shell(&array, script), run_shell(&linked, script));
}

/// Test a configured column layout and bounded history
#[test]
fn test_configured_layout_and_history_limit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("narrow.csv");
    fs::write(
        &path,
        concat!(
            "naics,zip,hood,opened,closed\n",
            "100-199,\"94110\",Mission,01/01/2000,\n",
            "100-199,94112,Excelsior,01/01/2000,01/01/2001\n",
        ),
    )
    .unwrap();

    let config = AnalyzerConfig::from_toml_str(
        r#"
[columns]
naics_code = 0
zip_code = 1
neighborhood = 2
open_date = 3
close_date = 4

[shell]
prompt = "> "
history_limit = 1
"#,
    )
    .unwrap();

    let registry =
        BusinessRegistry::load(&path, config.columns.clone(), CollectionStrategy::Array).unwrap();
    config.validate(registry.header()).unwrap();

    colored::control::set_override(false);
    let mut output = Vec::new();
    Shell::new(&registry, &config.shell)
        .run(Cursor::new("NAICS 150\nZIP 94112\nhistory\nquit\n"), &mut output)
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(
        output,
        "> Total Businesses: 2\nZip Codes: 2\nNeighborhood: 2\n\
         > 94112 Business Summary\nTotal Businesses: 1\nBusiness Types: 1\nNeighborhood: 1\n\
         > ZIP 94112\n\
         > "
    );
}

/// Test that blank lines are kept in history
///
/// Purpose: `history` echoes every line entered, including empty ones
/// Benefit: History output lines up with what the user actually typed
#[test]
fn test_history_includes_blank_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_registry_file(temp_dir.path());
    let registry =
        BusinessRegistry::load(&path, ColumnLayout::default(), CollectionStrategy::Array).unwrap();

    let output = run_shell(&registry, "Summary\n\nhistory\nquit\n");

    let expected = "\
Command: Total Businesses: 5
Closed Businesses: 2
New Business in last year: 2
Command: Command: Summary

Command: ";

    assert_eq!(output, expected);
}
