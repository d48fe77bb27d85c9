//! Config loading helpers (env + file + overrides).
//!
//! The loader owns the merge order and surfaces user-facing errors as
//! typed `ErrorEnvelope`s.

use crate::{LogFormat, LogLevel, SwimdeskConfig, SwimdeskEnv, ValidatedConfig, apply_env_overrides};
use serde::Deserialize;
use std::path::Path;
use swimdesk_shared::{ErrorClass, ErrorCode, ErrorEnvelope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Load the config from sources using a fixed precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`SwimdeskEnv`)
/// - overrides JSON (partial config)
/// - config JSON (file content)
/// - defaults (`SwimdeskConfig::default()`)
pub fn load_config_from_sources(
    config_json: Option<&str>,
    overrides_json: Option<&str>,
    env: &SwimdeskEnv,
) -> Result<ValidatedConfig, ErrorEnvelope> {
    let mut config = match config_json {
        None => SwimdeskConfig::default(),
        Some(input) => parse_config_unvalidated(input, ConfigFormat::Json)?,
    };

    if let Some(input) = overrides_json {
        let overrides = parse_overrides_json(input)?;
        apply_overrides(&mut config, &overrides);
    }

    // env goes last and also validates the merged config.
    apply_env_overrides(config, env)
}

/// Load the config from an optional file path.
pub fn load_config_from_path(
    config_path: Option<&Path>,
    overrides_json: Option<&str>,
    env: &SwimdeskEnv,
) -> Result<ValidatedConfig, ErrorEnvelope> {
    let mut config = match config_path {
        None => SwimdeskConfig::default(),
        Some(path) => {
            let format = detect_config_format(path)?;
            let config_text = read_config_file(path)?;
            tracing::debug!(path = %path.display(), ?format, "loading config file");
            parse_config_unvalidated(&config_text, format)?
        },
    };

    if let Some(input) = overrides_json {
        let overrides = parse_overrides_json(input)?;
        apply_overrides(&mut config, &overrides);
    }

    apply_env_overrides(config, env)
}

/// Load the config from std env and an optional file path.
pub fn load_config_std_env(
    config_path: Option<&Path>,
    overrides_json: Option<&str>,
) -> Result<ValidatedConfig, ErrorEnvelope> {
    let env = SwimdeskEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    if !env.is_empty() {
        tracing::debug!(?env, "applying env overrides");
    }
    load_config_from_path(config_path, overrides_json, &env)
}

/// Serialize the config as pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &SwimdeskConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_json"),
            format!("failed to serialize config: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &SwimdeskConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

fn parse_config_unvalidated(
    input: &str,
    format: ConfigFormat,
) -> Result<SwimdeskConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn parse_overrides_json(input: &str) -> Result<ConfigOverrides, ErrorEnvelope> {
    serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid overrides JSON: {error}"),
        )
        .with_metadata("source", "overrides")
    })
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct ConfigOverrides {
    version: Option<u32>,
    logging: LoggingOverrides,
    input: InputOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct LoggingOverrides {
    level: Option<LogLevel>,
    format: Option<LogFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct InputOverrides {
    max_bytes: Option<u64>,
}

fn apply_overrides(config: &mut SwimdeskConfig, overrides: &ConfigOverrides) {
    set_copy(&mut config.version, overrides.version);
    set_copy(&mut config.logging.level, overrides.logging.level);
    set_copy(&mut config.logging.format, overrides.logging.format);
    set_copy(&mut config.input.max_bytes, overrides.input.max_bytes);

    fn set_copy<T: Copy>(field: &mut T, value: Option<T>) {
        if let Some(value) = value {
            *field = value;
        }
    }
}
