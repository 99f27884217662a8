use anyhow::{Context, Result};
use business_analyzer::BusinessRegistry;
use business_analyzer::cli::{args::Args, logging::setup_logging, shell::Shell};
use clap::Parser;
use colored::*;
use std::io;
use std::process;
use tracing::info;

fn main() {
    // Parse command line arguments; clap prints usage and exits on bad input
    let args = Args::parse();

    match run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    args.validate()?;

    let config = args.load_config().context("Failed to load configuration")?;

    let registry = BusinessRegistry::load(&args.csv_path, config.columns.clone(), args.structure)
        .with_context(|| format!("Failed to load registry from {}", args.csv_path.display()))?;
    config.validate(registry.header())?;

    let stats = registry.load_stats();
    info!(
        "Registry ready: {} records, {} NAICS groups, {:.1}% of lines accepted",
        registry.record_count(),
        registry.group_count(),
        stats.success_rate()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&registry, &config.shell)
        .run(stdin.lock(), stdout.lock())
        .context("Interactive shell failed")?;

    Ok(())
}
