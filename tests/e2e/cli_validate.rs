//! CLI validation flow: inline, file and stdin payloads, exit codes.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

fn swimdesk(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_swimdesk"))
        .args(args)
        .arg("--quiet")
        .env_remove("RUST_LOG")
        .env_remove("SWIMDESK_INPUT_MAX_BYTES")
        .output()
}

fn swimdesk_with_stdin(args: &[&str], stdin: impl AsRef<[u8]>) -> io::Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_swimdesk"))
        .args(args)
        .arg("--quiet")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut pipe) = child.stdin.take() {
        pipe.write_all(stdin.as_ref())?;
    }
    child.wait_with_output()
}

fn json_stdout(output: &Output) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn inline_payload_is_normalized() -> Result<(), Box<dyn std::error::Error>> {
    let output = swimdesk(&[
        "validate",
        "--operation",
        "member.list",
        "--input-json",
        r#"{"maxResults":"20","states":"ACTIVE","extra":true}"#,
        "--output",
        "json",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    let value = json_stdout(&output)?;
    assert_eq!(
        value["params"],
        serde_json::json!({"maxResults": 20, "startIndex": 0, "states": "ACTIVE"})
    );
    Ok(())
}

#[test]
fn normalized_output_validates_again_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let args = ["validate", "--operation", "pool.list", "--output", "json"];
    let first = json_stdout(&swimdesk_with_stdin(&args, r#"{"startIndex":"5"}"#)?)?;
    let again = serde_json::to_string(&first["params"])?;
    let second = json_stdout(&swimdesk_with_stdin(&args, &again)?)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn missing_required_field_prints_the_user_message() -> io::Result<()> {
    let output = swimdesk(&["validate", "--operation", "member.get", "--input-json", "{}"])?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("error: ERR_VALIDATION_MISSING_VALUE: "));
    assert!(stderr.contains("user: El campo socio es obligatorio."));
    Ok(())
}

#[test]
fn update_without_values_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let output = swimdesk(&[
        "validate",
        "--operation",
        "member.update",
        "--input-json",
        r#"{"memberId":3}"#,
        "--output",
        "json",
    ])?;

    assert_eq!(output.status.code(), Some(2));
    let value = json_stdout(&output)?;
    assert_eq!(value["error"]["userMessage"], "No hay valores para actualizar.");
    assert_eq!(value["error"]["kind"], "EXPECTED");
    Ok(())
}

#[test]
fn validate_field_checks_one_key() -> io::Result<()> {
    let output = swimdesk(&[
        "validate-field",
        "--operation",
        "pool.add",
        "--field",
        "lanes",
        "--input-json",
        r#"{"lanes":21}"#,
    ])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("field: lanes"));
    Ok(())
}

#[test]
fn missing_input_file_exits_with_io() -> io::Result<()> {
    let output = swimdesk(&[
        "validate",
        "--operation",
        "member.list",
        "--input-file",
        "/nonexistent/swimdesk/params.json",
    ])?;

    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn oversized_input_is_refused() -> io::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_swimdesk"))
        .args(["validate", "--operation", "member.list", "--input-json"])
        .arg(format!(r#"{{"search":"{}"}}"#, "x".repeat(64)))
        .arg("--quiet")
        .env("SWIMDESK_INPUT_MAX_BYTES", "16")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_CLI_INPUT_TOO_LARGE"));
    Ok(())
}

#[test]
fn non_utf8_stdin_is_invalid_input() -> io::Result<()> {
    let output = swimdesk_with_stdin(
        &["validate", "--operation", "member.list"],
        [b'{', b'"', 0xff, b'"', b':', b'1', b'}'],
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_CLI_INVALID_JSON"));
    Ok(())
}
