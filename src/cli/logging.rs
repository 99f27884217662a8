//! Structured logging setup
//!
//! Logs always go to stderr so that reports on stdout stay clean.

use crate::cli::args::Args;
use crate::error::{AnalyzerError, Result};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set up structured logging from the verbosity flags
///
/// `RUST_LOG` takes precedence over the flags when it is set.
pub fn setup_logging(args: &Args) -> Result<()> {
    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("business_analyzer={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| {
        AnalyzerError::configuration(format!("Failed to initialise logging: {}", e))
    })?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
