//! CLI module for the C-minus compiler
//!
//! This module provides the command-line interface for the compiler.
//!
//! ## Usage
//!
//! - `cminus [FILE] [-o DIR]` - Scan and parse FILE (default `input.txt`) and write the five
//!   artifacts into DIR (default `.`)
//! - `cminus --check [FILE]` - Print diagnostics with source context; exit 1 if there are any
//! - `cminus --lex FILE` - Print the token listing (debug)
//! - `cminus --parse FILE` - Print the parse tree (debug)
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

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::OutputConfig;
use crate::output::SinkError;

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
#[derive(Debug)]
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

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SinkError> for CliError {
    fn from(err: SinkError) -> Self {
        CliError::failure(format!("Error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and predictive parser for the C-minus language
#[derive(Parser, Debug)]
#[command(name = "cminus")]
#[command(version = VERSION)]
#[command(about = "Scanner and predictive parser for the C-minus language", long_about = None)]
pub struct Cli {
    /// Source file to compile
    #[arg(value_name = "FILE", default_value = "input.txt")]
    pub file: PathBuf,

    /// Directory for the output artifacts
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print diagnostics with source context instead of writing artifacts
    #[arg(long)]
    pub check: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "check"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with_all = ["file", "check", "lex_file"])]
    pub parse_file: Option<PathBuf>,
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
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }
    if cli.check {
        return commands::check_file(&cli.file);
    }

    let config = OutputConfig::new().with_out_dir(cli.out_dir);
    commands::compile_file(&cli.file, config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["cminus"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("input.txt"));
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert!(!cli.check);
    }

    #[test]
    fn test_cli_parse_out_dir() {
        let cli = Cli::try_parse_from(["cminus", "prog.cm", "-o", "build"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("prog.cm"));
        assert_eq!(cli.out_dir, PathBuf::from("build"));

        let cli = Cli::try_parse_from(["cminus", "--out-dir", "out"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["cminus", "--lex", "test.cm"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["cminus", "--parse", "test.cm"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["cminus", "--check", "test.cm"]).unwrap();
        assert!(cli.check);
    }

    #[test]
    fn test_cli_debug_flags_conflict_with_file() {
        assert!(Cli::try_parse_from(["cminus", "a.cm", "--lex", "b.cm"]).is_err());
        assert!(Cli::try_parse_from(["cminus", "--lex", "a.cm", "--parse", "b.cm"]).is_err());
    }

    #[test]
    fn test_execute_writes_artifacts_and_succeeds_with_diagnostics() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "int x ( int a { return a ; }").unwrap();
        let out = dir.path().join("out");

        let cli = Cli::try_parse_from(["cminus", input.to_str().unwrap(), "-o", out.to_str().unwrap()]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);
        assert_eq!(
            fs::read_to_string(out.join("syntax_errors.txt")).unwrap(),
            "syntax error, missing )\n"
        );
    }

    #[test]
    fn test_execute_check_fails_on_diagnostics() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.cm");
        fs::write(&input, "int 007;").unwrap();

        let cli = Cli::try_parse_from(["cminus", "--check", input.to_str().unwrap()]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::FAILURE);
    }

    #[test]
    fn test_execute_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.cm");
        let cli = Cli::try_parse_from(["cminus", missing.to_str().unwrap()]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("nope.cm"), "got: {}", err.message);
    }
}
