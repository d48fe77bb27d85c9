//! CLI config commands: file formats, overrides and env precedence.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

fn swimdesk(args: &[&str], env: &[(&str, &str)]) -> io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_swimdesk"));
    command
        .args(args)
        .arg("--quiet")
        .env_remove("RUST_LOG")
        .env_remove("SWIMDESK_LOG_LEVEL")
        .env_remove("SWIMDESK_LOG_FORMAT")
        .env_remove("SWIMDESK_INPUT_MAX_BYTES");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output()
}

fn temp_config(name: &str, contents: &str) -> io::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("swimdesk-e2e-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn effective_config(output: &Output) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("config show failed: {stderr}").into());
    }
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    Ok(value["effectiveConfig"].clone())
}

#[test]
fn defaults_apply_without_sources() -> Result<(), Box<dyn std::error::Error>> {
    let output = swimdesk(&["config", "show", "--output", "json"], &[])?;
    let config = effective_config(&output)?;

    assert_eq!(config["version"], 1);
    assert_eq!(config["input"]["maxBytes"], 1_048_576);
    Ok(())
}

#[test]
fn env_beats_overrides_beats_file() -> Result<(), Box<dyn std::error::Error>> {
    let path = temp_config(
        "precedence.toml",
        "[logging]\nlevel = \"warn\"\n[input]\nmaxBytes = 1000\n",
    )?;
    let path = path.to_string_lossy().to_string();

    let overrides = r#"{"input":{"maxBytes":2000}}"#;
    let args = [
        "config",
        "show",
        "--path",
        path.as_str(),
        "--overrides-json",
        overrides,
        "--output",
        "json",
    ];

    let config = effective_config(&swimdesk(&args, &[])?)?;
    assert_eq!(config["logging"]["level"], "warn");
    assert_eq!(config["input"]["maxBytes"], 2000);

    let config = effective_config(&swimdesk(&args, &[("SWIMDESK_INPUT_MAX_BYTES", "3000")])?)?;
    assert_eq!(config["input"]["maxBytes"], 3000);
    Ok(())
}

#[test]
fn global_config_flag_feeds_config_show() -> Result<(), Box<dyn std::error::Error>> {
    let path = temp_config("global.json", r#"{"logging":{"format":"json"}}"#)?;
    let path = path.to_string_lossy().to_string();

    let output = swimdesk(&["--config", path.as_str(), "config", "show", "--output", "json"], &[])?;
    let config = effective_config(&output)?;
    assert_eq!(config["logging"]["format"], "json");
    Ok(())
}

#[test]
fn invalid_env_is_reported_by_check() -> io::Result<()> {
    let output = swimdesk(&["config", "check"], &[("SWIMDESK_LOG_LEVEL", "loud")])?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("ERR_CONFIG_INVALID_ENV_ENUM"));
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> io::Result<()> {
    let path = temp_config("swimdesk.yaml", "version: 1\n")?;
    let path = path.to_string_lossy().to_string();

    let output = swimdesk(&["config", "check", "--path", path.as_str()], &[])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_CONFIG_UNSUPPORTED_FORMAT"));
    Ok(())
}
