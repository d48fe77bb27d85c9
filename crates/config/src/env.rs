//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is present but empty or
//! unparsable fails instead of being ignored.

use crate::schema::{LogFormat, LogLevel, SwimdeskConfig, ValidatedConfig};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use swimdesk_shared::{ErrorCode, ErrorEnvelope};

/// Env var: log level (`trace` .. `error`).
pub const ENV_LOG_LEVEL: &str = "SWIMDESK_LOG_LEVEL";
/// Env var: log format (`text` | `json`).
pub const ENV_LOG_FORMAT: &str = "SWIMDESK_LOG_FORMAT";
/// Env var: input payload limit in bytes.
pub const ENV_INPUT_MAX_BYTES: &str = "SWIMDESK_INPUT_MAX_BYTES";

const ALL_VARS: [&str; 3] = [ENV_LOG_LEVEL, ENV_LOG_FORMAT, ENV_INPUT_MAX_BYTES];

/// Parsed env overrides. `None` means the variable was not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwimdeskEnv {
    /// `SWIMDESK_LOG_LEVEL`.
    pub log_level: Option<LogLevel>,
    /// `SWIMDESK_LOG_FORMAT`.
    pub log_format: Option<LogFormat>,
    /// `SWIMDESK_INPUT_MAX_BYTES`.
    pub input_max_bytes: Option<u64>,
}

impl SwimdeskEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            log_level: parse_optional_enum(map, ENV_LOG_LEVEL)?,
            log_format: parse_optional_enum(map, ENV_LOG_FORMAT)?,
            input_max_bytes: parse_optional_u64(map, ENV_INPUT_MAX_BYTES)?,
        })
    }

    /// Parse env overrides from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in ALL_VARS {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_string(), value);
            }
        }
        Self::from_map(&map)
    }

    /// Whether any variable was set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.log_level.is_none() && self.log_format.is_none() && self.input_max_bytes.is_none()
    }
}

/// Apply env overrides to a base config (env wins over file/default values).
pub fn apply_env_overrides(
    base: SwimdeskConfig,
    env: &SwimdeskEnv,
) -> Result<ValidatedConfig, ErrorEnvelope> {
    let mut config = base;
    if let Some(level) = env.log_level {
        config.logging.level = level;
    }
    if let Some(format) = env.log_format {
        config.logging.format = format;
    }
    if let Some(max_bytes) = env.input_max_bytes {
        config.input.max_bytes = max_bytes;
    }

    config.validate_and_normalize().map_err(Into::into)
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Integer env var had an invalid value.
    InvalidInt {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// Enum env var had an invalid value.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidInt { .. } => ErrorCode::new("config", "invalid_env_int"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidInt { var, .. } => write!(formatter, "{var} must be an integer"),
            Self::InvalidEnum { var, .. } => write!(formatter, "{var} has an unsupported value"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidInt { var, value } | EnvParseError::InvalidEnum { var, value } => {
                envelope
                    .with_metadata("env_var", var)
                    .with_metadata("value", value)
            },
        }
    }
}

fn non_empty<'a>(
    map: &'a BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<&'a str>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }
    Ok(Some(trimmed))
}

fn parse_optional_u64(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<u64>, EnvParseError> {
    let Some(trimmed) = non_empty(map, var)? else {
        return Ok(None);
    };

    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| EnvParseError::InvalidInt {
            var,
            value: trimmed.to_string(),
        })
}

fn parse_optional_enum<T: FromStr>(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<T>, EnvParseError> {
    let Some(trimmed) = non_empty(map, var)? else {
        return Ok(None);
    };

    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| EnvParseError::InvalidEnum {
            var,
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn missing_vars_parse_to_none() -> Result<(), Box<dyn Error>> {
        let env = SwimdeskEnv::from_map(&BTreeMap::new())?;
        assert!(env.is_empty());
        Ok(())
    }

    #[test]
    fn values_are_trimmed_and_parsed() -> Result<(), Box<dyn Error>> {
        let env = SwimdeskEnv::from_map(&map(&[
            (ENV_LOG_LEVEL, " DEBUG "),
            (ENV_LOG_FORMAT, "json"),
            (ENV_INPUT_MAX_BYTES, "4096"),
        ]))?;
        assert_eq!(env.log_level, Some(LogLevel::Debug));
        assert_eq!(env.log_format, Some(LogFormat::Json));
        assert_eq!(env.input_max_bytes, Some(4096));
        Ok(())
    }

    #[test]
    fn empty_and_invalid_values_fail() -> Result<(), Box<dyn Error>> {
        let empty = SwimdeskEnv::from_map(&map(&[(ENV_LOG_LEVEL, "  ")])).err();
        assert_eq!(empty, Some(EnvParseError::EmptyValue { var: ENV_LOG_LEVEL }));

        let error = SwimdeskEnv::from_map(&map(&[(ENV_INPUT_MAX_BYTES, "1MB")]))
            .err()
            .ok_or_else(|| std::io::Error::other("expected int error"))?;
        let envelope = ErrorEnvelope::from(error);
        assert_eq!(envelope.code, ErrorCode::new("config", "invalid_env_int"));
        assert_eq!(envelope.metadata.get("value").map(String::as_str), Some("1MB"));

        let format = SwimdeskEnv::from_map(&map(&[(ENV_LOG_FORMAT, "yaml")])).err();
        assert!(matches!(format, Some(EnvParseError::InvalidEnum { .. })));
        Ok(())
    }

    #[test]
    fn env_overrides_are_validated() {
        let env = SwimdeskEnv {
            input_max_bytes: Some(0),
            ..SwimdeskEnv::default()
        };
        let error = apply_env_overrides(SwimdeskConfig::default(), &env).err();
        assert!(matches!(
            error,
            Some(error) if error.code == ErrorCode::new("config", "invalid_limit")
        ));
    }
}
