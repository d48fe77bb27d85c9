//! Output format helpers for CLI commands.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    #[default]
    Text,
    /// Machine-friendly JSON output.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
    /// Suppress log output on stderr.
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// Output mode derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl OutputMode {
    /// Build output mode from CLI flags.
    #[must_use]
    pub const fn from_args(args: &OutputArgs) -> Self {
        Self {
            format: args.output,
            quiet: args.quiet,
        }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Pretty JSON with a trailing newline.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}
