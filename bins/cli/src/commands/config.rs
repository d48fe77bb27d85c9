//! `config show` and `config check` handlers.

use crate::error::CliError;
use crate::format::{OutputMode, pretty_json};
use crate::{CliOutput, format_error_output};
use std::path::Path;
use swimdesk_config::{ValidatedConfig, load_config_std_env, to_pretty_json, to_pretty_toml};

/// Run `config show`: print the effective config.
pub fn run_config_show(
    mode: OutputMode,
    path: Option<&Path>,
    overrides_json: Option<&str>,
) -> Result<CliOutput, CliError> {
    let config = match load_config_std_env(path, overrides_json) {
        Ok(config) => config,
        Err(error) => return Ok(format_error_output(mode, &error)),
    };
    show_config(mode, path, &config)
}

/// Run `config check`: confirm the effective config loads.
pub fn run_config_check(
    mode: OutputMode,
    path: Option<&Path>,
    overrides_json: Option<&str>,
) -> Result<CliOutput, CliError> {
    if let Err(error) = load_config_std_env(path, overrides_json) {
        return Ok(format_error_output(mode, &error));
    }
    tracing::info!("config check completed");

    let config_path = path.map(|value| value.to_string_lossy().to_string());
    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "configPath": config_path,
        }))?
    } else {
        config_path.map_or_else(
            || "status: ok\nconfig: ok\n".to_string(),
            |path| format!("status: ok\nconfig: ok\npath: {path}\n"),
        )
    };

    Ok(CliOutput::ok(stdout))
}

fn show_config(
    mode: OutputMode,
    path: Option<&Path>,
    config: &ValidatedConfig,
) -> Result<CliOutput, CliError> {
    let rendered = if mode.is_json() {
        to_pretty_json(config)
    } else {
        to_pretty_toml(config)
    };
    let rendered = match rendered {
        Ok(rendered) => rendered,
        Err(error) => return Ok(format_error_output(mode, &error)),
    };

    let stdout = if mode.is_json() {
        let effective: serde_json::Value = serde_json::from_str(rendered.trim())?;
        pretty_json(&serde_json::json!({
            "status": "ok",
            "configPath": path.map(|value| value.to_string_lossy().to_string()),
            "effectiveConfig": effective,
        }))?
    } else {
        format!("status: ok\nconfig:\n{rendered}")
    };

    Ok(CliOutput::ok(stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitCode;
    use crate::format::OutputFormat;
    use serde_json::Value;
    use std::error::Error;
    use swimdesk_config::{SwimdeskEnv, load_config_from_sources};

    const JSON: OutputMode = OutputMode {
        format: OutputFormat::Json,
        quiet: true,
    };
    const TEXT: OutputMode = OutputMode {
        format: OutputFormat::Text,
        quiet: true,
    };

    #[test]
    fn show_renders_toml_in_text_mode() -> Result<(), Box<dyn Error>> {
        let config = load_config_from_sources(
            None,
            Some(r#"{"input":{"maxBytes":4096}}"#),
            &SwimdeskEnv::default(),
        )?;
        let output = show_config(TEXT, None, &config)?;
        assert!(output.stdout.starts_with("status: ok\nconfig:\n"));
        assert!(output.stdout.contains("maxBytes = 4096"));
        Ok(())
    }

    #[test]
    fn show_embeds_the_effective_config_in_json_mode() -> Result<(), Box<dyn Error>> {
        let config = load_config_from_sources(None, None, &SwimdeskEnv::default())?;
        let output = show_config(JSON, Some(Path::new("swimdesk.toml")), &config)?;
        let value: Value = serde_json::from_str(output.stdout.trim())?;
        assert_eq!(value["configPath"], "swimdesk.toml");
        assert_eq!(value["effectiveConfig"]["logging"]["level"], "info");
        Ok(())
    }

    #[test]
    fn check_reports_bad_overrides() -> Result<(), Box<dyn Error>> {
        let output = run_config_check(TEXT, None, Some(r#"{"input":{"maxBytes":0}}"#))?;
        assert_eq!(output.exit_code, ExitCode::InvalidInput);
        assert!(output.stderr.starts_with("error: ERR_CONFIG_INVALID_LIMIT"));
        Ok(())
    }
}
