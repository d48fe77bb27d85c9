//! CLI configuration schema, defaults, validation, and normalization.
//!
//! - Deserialization uses `serde` (JSON or TOML).
//! - Validation is manual and returns typed errors mapped to `ErrorEnvelope`.
//! - Numeric limits are carried as bounded values once validated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use swimdesk_shared::{BoundedU64, ErrorCode, ErrorEnvelope};

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Smallest accepted input payload limit.
pub const INPUT_MAX_BYTES_MIN: u64 = 1;
/// Largest accepted input payload limit (64 MiB).
pub const INPUT_MAX_BYTES_MAX: u64 = 64 * 1024 * 1024;
/// Default input payload limit (1 MiB).
pub const INPUT_MAX_BYTES_DEFAULT: u64 = 1024 * 1024;

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SwimdeskConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Log output settings.
    pub logging: LoggingConfig,
    /// Payload intake settings.
    pub input: InputConfig,
}

impl Default for SwimdeskConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            logging: LoggingConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl SwimdeskConfig {
    /// Validate and normalize the config.
    pub fn validate_and_normalize(self) -> Result<ValidatedConfig, ConfigSchemaError> {
        self.validate_version()?;
        let limits = ConfigLimits::new(&self)?;
        Ok(ValidatedConfig { raw: self, limits })
    }

    const fn validate_version(&self) -> Result<(), ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }
        Ok(())
    }
}

/// Validated config wrapper carrying bounded numeric values.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    raw: SwimdeskConfig,
    limits: ConfigLimits,
}

impl ValidatedConfig {
    /// Access validated numeric bounds.
    #[must_use]
    pub const fn limits(&self) -> &ConfigLimits {
        &self.limits
    }

    /// Borrow the raw config.
    #[must_use]
    pub const fn as_ref(&self) -> &SwimdeskConfig {
        &self.raw
    }

    /// Consume the wrapper and return the raw config.
    #[must_use]
    pub fn into_inner(self) -> SwimdeskConfig {
        self.raw
    }
}

impl AsRef<SwimdeskConfig> for ValidatedConfig {
    fn as_ref(&self) -> &SwimdeskConfig {
        &self.raw
    }
}

impl std::ops::Deref for ValidatedConfig {
    type Target = SwimdeskConfig;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

/// Validated numeric limits derived from the config.
#[derive(Debug, Clone, Copy)]
pub struct ConfigLimits {
    /// Largest payload the CLI reads, in bytes.
    pub input_max_bytes: BoundedU64<INPUT_MAX_BYTES_MIN, INPUT_MAX_BYTES_MAX>,
}

impl ConfigLimits {
    fn new(config: &SwimdeskConfig) -> Result<Self, ConfigSchemaError> {
        Ok(Self {
            input_max_bytes: bounded_u64(
                "input",
                "maxBytes",
                config.input.max_bytes,
                INPUT_MAX_BYTES_MIN,
                INPUT_MAX_BYTES_MAX,
            )?,
        })
    }
}

/// Parse a config from a JSON string, applying validation and normalization.
pub fn parse_config_json(input: &str) -> Result<ValidatedConfig, ErrorEnvelope> {
    let config: SwimdeskConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}

/// Parse a config from a TOML string, applying validation and normalization.
pub fn parse_config_toml(input: &str) -> Result<ValidatedConfig, ErrorEnvelope> {
    let config: SwimdeskConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-field normalization traces.
    Trace,
    /// Rejections and config sources.
    Debug,
    /// Default.
    #[default]
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing-subscriber`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Config spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Minimum level emitted when `RUST_LOG` is unset.
    pub level: LogLevel,
    /// Line encoding on stderr.
    pub format: LogFormat,
}

/// Payload intake configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct InputConfig {
    /// Largest payload read from a file or stdin, in bytes.
    pub max_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_bytes: INPUT_MAX_BYTES_DEFAULT,
        }
    }
}

/// Typed validation errors for the configuration schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// A numeric limit is out of bounds.
    LimitOutOfRange {
        /// Schema section (e.g. `input`).
        section: &'static str,
        /// Field name in the config file (e.g. `maxBytes`).
        field: &'static str,
        /// Value provided.
        value: u64,
        /// Minimum allowed value.
        min: u64,
        /// Maximum allowed value.
        max: u64,
    },
}

impl ConfigSchemaError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedVersion { .. } => ErrorCode::new("config", "unsupported_version"),
            Self::LimitOutOfRange { .. } => ErrorCode::new("config", "invalid_limit"),
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => {
                write!(
                    formatter,
                    "unsupported config version: {found} (supported: {supported})"
                )
            },
            Self::LimitOutOfRange {
                section,
                field,
                value,
                min,
                max,
            } => write!(
                formatter,
                "{section}.{field} must be within [{min}, {max}] (got {value})"
            ),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => envelope
                .with_metadata("found", found.to_string())
                .with_metadata("supported", supported.to_string()),
            ConfigSchemaError::LimitOutOfRange {
                section,
                field,
                value,
                min,
                max,
            } => envelope
                .with_metadata("section", section)
                .with_metadata("field", field)
                .with_metadata("value", value.to_string())
                .with_metadata("min", min.to_string())
                .with_metadata("max", max.to_string()),
        }
    }
}

fn bounded_u64<const MIN: u64, const MAX: u64>(
    section: &'static str,
    field: &'static str,
    value: u64,
    min: u64,
    max: u64,
) -> Result<BoundedU64<MIN, MAX>, ConfigSchemaError> {
    BoundedU64::try_new(value).map_err(|_| ConfigSchemaError::LimitOutOfRange {
        section,
        field,
        value,
        min,
        max,
    })
}
