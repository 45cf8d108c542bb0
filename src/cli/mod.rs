//! CLI module for cvnum
//!
//! ## Commands
//!
//! - `convert <VALUE>` - Write a decimal value in another base
//! - `from-digits <DIGIT>...` - Write a decimal digit sequence in another base
//! - `from-numerals <NUMERAL>...` - Write a decimal numeral sequence in another base
//! - `width <BASE>` - Show the numeral group width of a base
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
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::Diagnostic;

use crate::config::ConverterConfig;
use crate::converter::NatConverter;
use crate::digits::Digit;
use crate::error::ConvertError;
use crate::version::CVNUM_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
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

impl From<ConvertError> for CliError {
    /// Render as `Kind: message`, followed by the diagnostic help line when there is one.
    fn from(err: ConvertError) -> Self {
        let mut message = format!("{}: {}", err.kind(), err);
        if let Some(help) = err.help() {
            message.push_str(&format!("\n  help: {help}"));
        }
        Self::failure(message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Convert natural numbers between decimal and arbitrary positional bases
#[derive(Parser, Debug)]
#[command(name = "cvnum")]
#[command(version = CVNUM_VERSION)]
#[command(about = "Convert natural numbers between decimal and arbitrary positional bases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Skip natural-number checks on inputs (results for invalid input are unspecified)
    #[arg(long = "unsafe", global = true)]
    pub unsafe_mode: bool,

    /// Name given to the converted value in validation messages
    #[arg(long, value_name = "TEXT", global = true)]
    pub label: Option<String>,
}

/// Shape of the converted output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Numerals joined by the separator
    String,
    /// Space-separated digit values
    Digits,
    /// Space-separated numerals
    Numerals,
}

/// Target base and rendering shared by the conversion commands.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Base to convert into
    #[arg(short, long, default_value_t = 16)]
    pub base: u64,
    /// Output shape
    #[arg(short, long, value_enum, default_value_t = OutputShape::String)]
    pub output: OutputShape,
    /// Separator between numerals (string output)
    #[arg(short, long, default_value = "")]
    pub sep: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a decimal value in another base
    Convert {
        /// Decimal natural number
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Write a decimal digit sequence in another base
    FromDigits {
        /// Decimal digits, most-significant first
        #[arg(value_name = "DIGIT", required = true)]
        digits: Vec<Digit>,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Write a decimal numeral sequence in another base
    FromNumerals {
        /// Decimal numerals, most-significant first
        #[arg(value_name = "NUMERAL", required = true)]
        numerals: Vec<String>,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show the numeral group width of a base
    Width {
        #[arg(value_name = "BASE")]
        base: u64,
    },
}

impl Cli {
    /// Converter configured from the global flags.
    pub fn converter(&self) -> NatConverter {
        let mut config = ConverterConfig::new().with_safe_mode(!self.unsafe_mode);
        if let Some(label) = &self.label {
            config = config.with_error_label(label.clone());
        }
        NatConverter::new(config)
    }
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
        Ok(output) => println!("{output}"),
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
    let conv = cli.converter();

    match cli.command {
        Command::Convert { value, target } => commands::convert_value(&conv, &value, &target),
        Command::FromDigits { digits, target } => commands::convert_digits(&conv, &digits, &target),
        Command::FromNumerals { numerals, target } => commands::convert_numerals(&conv, &numerals, &target),
        Command::Width { base } => commands::group_width(&conv, base),
    }
}

// ============================================================================
// Tests
// ============================================================================
