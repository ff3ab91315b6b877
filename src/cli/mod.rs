//! CLI module for cairn
//!
//! ## Commands
//!
//! - `explain <KIND>` - Describe an error kind, with examples
//! - `vocab` - List DSL keywords and the attributes each descriptor kind exposes
//! - `reference` - Print the Markdown DSL reference
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the cairn descriptor DSL
#[derive(Parser, Debug)]
#[command(name = "cairn")]
#[command(version = VERSION)]
#[command(about = "Inspect the cairn descriptor DSL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Describe an error kind
    Explain {
        /// Canonical error kind name, e.g. UnknownAttribute
        #[arg(value_name = "KIND")]
        kind: String,
    },

    /// List DSL keywords and descriptor attributes
    Vocab,

    /// Print the Markdown DSL reference
    Reference,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its output.
pub fn execute(cli: Cli) -> CliResult<String> {
    tracing::debug!(command = ?cli.command, "executing");
    match cli.command {
        Command::Explain { kind } => commands::explain(&kind),
        Command::Vocab => Ok(commands::vocab()),
        Command::Reference => Ok(commands::reference()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_explain() {
        let cli = Cli::try_parse_from(["cairn", "explain", "MissingBlock"]).unwrap();
        if let Command::Explain { kind } = cli.command {
            assert_eq!(kind, "MissingBlock");
        } else {
            panic!("Expected Explain command");
        }
    }

    #[test]
    fn test_cli_parse_vocab_and_reference() {
        let cli = Cli::try_parse_from(["cairn", "vocab"]).unwrap();
        assert!(matches!(cli.command, Command::Vocab));
        let cli = Cli::try_parse_from(["cairn", "reference"]).unwrap();
        assert!(matches!(cli.command, Command::Reference));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["cairn"]).is_err());
        assert!(Cli::try_parse_from(["cairn", "explain"]).is_err());
    }

    #[test]
    fn test_execute_unknown_kind_fails() {
        let cli = Cli::try_parse_from(["cairn", "explain", "Nope"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Nope"));
    }
}
