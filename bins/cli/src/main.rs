//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod input;
mod logging;

use clap::{Parser, Subcommand};
use commands::{
    run_config_check, run_config_show, run_info, run_operations, run_registry, run_schema,
    run_validate, run_validate_field,
};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode, pretty_json};
use input::InputArgs;
use std::io::{self, Write};
use std::path::PathBuf;
use swimdesk_api::v1::{ApiV1ErrorDto, ApiV1ErrorKind, error_envelope_to_api_v1_error};
use swimdesk_config::{LoggingConfig, ValidatedConfig, load_config_std_env};
use swimdesk_shared::ErrorEnvelope;

#[derive(Debug, Parser)]
#[command(
    name = "swimdesk",
    version,
    about = "Validate swim-school back-office request parameters",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    /// Optional config file path (JSON/TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate and normalize the params of an operation.
    Validate {
        /// Operation name (e.g. `member.add`).
        #[arg(long)]
        operation: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Validate a single field, as a form does on blur.
    ValidateField {
        /// Operation name (e.g. `member.add`).
        #[arg(long)]
        operation: String,
        /// Wire key of the field (e.g. `email`).
        #[arg(long)]
        field: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the operation catalogue.
    Operations,
    /// Print the JSON Schema of one operation, or of all of them.
    Schema {
        /// Operation name; all operations when omitted.
        #[arg(long)]
        operation: Option<String>,
    },
    /// List constant registries, or the entries of one.
    Registry {
        /// Registry name (e.g. `Payment.States`).
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show build and version details.
    Info,
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Show the effective config after merging all sources.
    Show {
        /// Optional config file path (JSON/TOML); defaults to `--config`.
        #[arg(long)]
        path: Option<PathBuf>,
        /// Optional JSON overrides (partial config).
        #[arg(long)]
        overrides_json: Option<String>,
    },
    /// Check that the effective config loads and validates.
    Check {
        /// Optional config file path (JSON/TOML); defaults to `--config`.
        #[arg(long)]
        path: Option<PathBuf>,
        /// Optional JSON overrides (partial config).
        #[arg(long)]
        overrides_json: Option<String>,
    },
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

impl CliOutput {
    /// Successful output on stdout.
    pub(crate) const fn ok(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: ExitCode::Ok,
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_args(&cli.output);
    let config = load_config_std_env(cli.config.as_deref(), None);

    let logging = config
        .as_ref()
        .map_or_else(|_| LoggingConfig::default(), |config| config.logging);
    logging::init(logging, mode.quiet);

    match run(&cli, mode, config) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(
    cli: &Cli,
    mode: OutputMode,
    config: Result<ValidatedConfig, ErrorEnvelope>,
) -> Result<CliOutput, CliError> {
    match &cli.command {
        Commands::Validate { operation, input } => match config {
            Ok(config) => run_validate(mode, &config, operation, input),
            Err(error) => Ok(format_error_output(mode, &error)),
        },
        Commands::ValidateField {
            operation,
            field,
            input,
        } => match config {
            Ok(config) => run_validate_field(mode, &config, operation, field, input),
            Err(error) => Ok(format_error_output(mode, &error)),
        },
        Commands::Operations => run_operations(mode),
        Commands::Schema { operation } => run_schema(mode, operation.as_deref()),
        Commands::Registry { name } => run_registry(mode, name.as_deref()),
        Commands::Info => run_info(mode),
        // Config commands load their own sources and report failures themselves.
        Commands::Config { command } => match command {
            ConfigCommands::Show {
                path,
                overrides_json,
            } => run_config_show(
                mode,
                path.as_deref().or(cli.config.as_deref()),
                overrides_json.as_deref(),
            ),
            ConfigCommands::Check {
                path,
                overrides_json,
            } => run_config_check(
                mode,
                path.as_deref().or(cli.config.as_deref()),
                overrides_json.as_deref(),
            ),
        },
    }
}

/// Render a failed command. JSON goes to stdout, text goes to stderr.
pub(crate) fn format_error_output(mode: OutputMode, error: &ErrorEnvelope) -> CliOutput {
    let api_error = error_envelope_to_api_v1_error(error, None);
    let exit_code = ExitCode::for_envelope(error);

    if mode.is_json() {
        let payload = serde_json::json!({
            "status": "error",
            "error": api_error,
        });

        // This is a CLI boundary, so JSON serialization errors are internal.
        let stdout = pretty_json(&payload).unwrap_or_else(|_| {
            "{\"status\":\"error\",\"error\":{\"code\":\"ERR_CORE_INTERNAL\",\"message\":\"internal error\",\"kind\":\"INVARIANT\"}}\n".to_string()
        });
        return CliOutput {
            stdout,
            stderr: String::new(),
            exit_code,
        };
    }

    CliOutput {
        stdout: String::new(),
        stderr: format_api_error_text(&api_error),
        exit_code,
    }
}

fn format_api_error_text(error: &ApiV1ErrorDto) -> String {
    let mut out = format!("error: {}: {}\n", error.code, error.message);
    if let Some(user_message) = error.user_message.as_deref() {
        out.push_str("user: ");
        out.push_str(user_message);
        out.push('\n');
    }
    if error.kind == ApiV1ErrorKind::Invariant {
        out.push_str("kind: INVARIANT\n");
    }

    if let Some(meta) = error.meta.as_ref()
        && !meta.is_empty()
    {
        out.push_str("meta:\n");
        for (key, value) in meta {
            out.push_str("  ");
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
    }

    out
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;

    if !output.stderr.is_empty() {
        let mut stderr = io::stderr();
        stderr.write_all(output.stderr.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}
