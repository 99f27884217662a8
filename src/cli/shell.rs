//! Interactive command loop
//!
//! Reads one command per line, runs the matching registry query and writes
//! the report. Keywords are case-insensitive. Query failures such as an
//! uncovered NAICS code are reported and the loop keeps going; only I/O
//! failures on the console end it.

use crate::app::services::business_registry::BusinessRegistry;
use crate::cli::history::CommandHistory;
use crate::config::ShellConfig;
use crate::constants::commands;
use crate::error::{AnalyzerError, Result};
use colored::*;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::debug;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    History,
    Zip(String),
    Naics(String),
    Summary,
    /// Blank input
    Empty,
    /// Anything else; ignored apart from being remembered
    Unknown(String),
}

impl Command {
    /// Parse a line of input
    ///
    /// `ZIP` and `NAICS` take the next whitespace-separated token as their
    /// argument and fail with [`AnalyzerError::MissingArgument`] without one.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(Self::Empty);
        };
        let argument = tokens.next();
        let has_extra = argument.is_some();

        let command = match keyword.to_lowercase().as_str() {
            commands::QUIT if !has_extra => Self::Quit,
            commands::HISTORY if !has_extra => Self::History,
            commands::SUMMARY if !has_extra => Self::Summary,
            commands::ZIP => Self::Zip(
                argument
                    .ok_or(AnalyzerError::MissingArgument {
                        usage: commands::ZIP_USAGE,
                    })?
                    .to_string(),
            ),
            commands::NAICS => Self::Naics(
                argument
                    .ok_or(AnalyzerError::MissingArgument {
                        usage: commands::NAICS_USAGE,
                    })?
                    .to_string(),
            ),
            _ => Self::Unknown(line.trim().to_string()),
        };

        Ok(command)
    }
}

/// Interactive query shell over a loaded registry
pub struct Shell<'a> {
    registry: &'a BusinessRegistry,
    history: CommandHistory,
    prompt: String,
}

impl<'a> Shell<'a> {
    pub fn new(registry: &'a BusinessRegistry, config: &ShellConfig) -> Self {
        Self {
            registry,
            history: CommandHistory::new(config.history_limit),
            prompt: config.prompt.clone(),
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input, leaving shell");
                writeln!(output)?;
                break;
            }

            let entered = line.trim_end_matches(['\r', '\n']);
            if self.execute(entered, &mut output)?.is_break() {
                break;
            }
        }

        Ok(())
    }

    /// Execute one line of input, writing any report to `output`
    ///
    /// Every line other than `quit`, blank ones included, is added to the
    /// history after it runs, so `history` lists the lines entered before it.
    pub fn execute<W: Write>(&mut self, line: &str, output: &mut W) -> Result<ControlFlow<()>> {
        let outcome = match Command::parse(line) {
            Ok(command) => self.dispatch(&command, output),
            Err(e) => Err(e),
        };

        let flow = match outcome {
            Ok(flow) => flow,
            Err(e) if e.is_recoverable() => {
                debug!("Command '{}' failed: {}", line, e);
                writeln!(output, "{}", format!("Error: {}", e).red())?;
                ControlFlow::Continue(())
            }
            Err(e) => return Err(e),
        };

        if flow.is_continue() {
            self.history.record(line);
        }

        Ok(flow)
    }

    fn dispatch<W: Write>(&self, command: &Command, output: &mut W) -> Result<ControlFlow<()>> {
        match command {
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::History => {
                for entry in self.history.iter() {
                    writeln!(output, "{}", entry)?;
                }
            }
            Command::Zip(zip) => writeln!(output, "{}", self.registry.zip_summary(zip))?,
            Command::Naics(code) => writeln!(output, "{}", self.registry.code_summary(code)?)?,
            Command::Summary => writeln!(output, "{}", self.registry.summary())?,
            Command::Empty => {}
            Command::Unknown(text) => debug!("Ignoring unknown command '{}'", text),
        }

        Ok(ControlFlow::Continue(()))
    }
}
