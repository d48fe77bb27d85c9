//! # swimdesk-config
//!
//! Configuration schema, validation and loading for the `swimdesk` CLI.
//! This crate depends on `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file + overrides).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    ENV_INPUT_MAX_BYTES, ENV_LOG_FORMAT, ENV_LOG_LEVEL, EnvParseError, SwimdeskEnv,
    apply_env_overrides,
};
pub use load::{
    load_config_from_path, load_config_from_sources, load_config_std_env, to_pretty_json,
    to_pretty_toml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, ConfigLimits, ConfigSchemaError, INPUT_MAX_BYTES_DEFAULT,
    INPUT_MAX_BYTES_MAX, INPUT_MAX_BYTES_MIN, InputConfig, LogFormat, LogLevel, LoggingConfig,
    SwimdeskConfig, ValidatedConfig, parse_config_json, parse_config_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
