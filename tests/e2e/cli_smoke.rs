//! CLI smoke tests: catalogue listing and deterministic output.

use std::io;
use std::process::{Command, Output};

fn swimdesk(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_swimdesk"))
        .args(args)
        .arg("--quiet")
        .env_remove("RUST_LOG")
        .output()
}

fn stdout_of(args: &[&str]) -> io::Result<String> {
    let output = swimdesk(args)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::other(format!("{args:?} failed: {stderr}")));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[test]
fn info_is_deterministic() -> io::Result<()> {
    let first = stdout_of(&["info", "--output", "json"])?;
    let second = stdout_of(&["info", "--output", "json"])?;

    assert_eq!(first, second, "info output should be deterministic");
    assert!(first.contains("\"operations\": 32"));
    Ok(())
}

#[test]
fn operations_lists_the_catalogue() -> io::Result<()> {
    let stdout = stdout_of(&["operations"])?;

    assert_eq!(stdout.lines().count(), 32);
    assert!(stdout.lines().any(|line| line.starts_with("attendance.list")));
    Ok(())
}

#[test]
fn registry_prints_entries() -> io::Result<()> {
    let stdout = stdout_of(&["registry", "Schedule.WeekDays"])?;

    assert!(stdout.starts_with("Schedule.WeekDays\n"));
    assert!(stdout.contains("MONDAY"));
    Ok(())
}

#[test]
fn schema_is_valid_json() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = stdout_of(&["schema", "--operation", "member.add"])?;
    let schema: serde_json::Value = serde_json::from_str(&stdout)?;

    assert!(schema["properties"].get("email").is_some());
    Ok(())
}

#[test]
fn unknown_registry_exits_with_invalid_input() -> io::Result<()> {
    let output = swimdesk(&["registry", "Pool.Colours"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_CLI_UNKNOWN_REGISTRY"));
    Ok(())
}
