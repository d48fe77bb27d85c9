//! `validate` and `validate-field` handlers.

use crate::error::CliError;
use crate::format::{OutputMode, pretty_json};
use crate::input::{InputArgs, read_payload};
use crate::{CliOutput, format_error_output};
use serde_json::Value;
use swimdesk_api::v1::{ApiOperation, validate_operation, validate_operation_field};
use swimdesk_config::ValidatedConfig;
use swimdesk_shared::{ErrorCode, ErrorEnvelope};

/// Run `validate`: print the normalized params or the first rejection.
pub fn run_validate(
    mode: OutputMode,
    config: &ValidatedConfig,
    operation: &str,
    input: &InputArgs,
) -> Result<CliOutput, CliError> {
    let result = parse_operation(operation).and_then(|operation| {
        let payload = read_payload(input, config.limits().input_max_bytes.get())?;
        validate_operation(operation, &payload).map(|params| (operation, params))
    });

    let (operation, params) = match result {
        Ok(validated) => validated,
        Err(error) => return Ok(format_error_output(mode, &error)),
    };
    tracing::info!(operation = operation.as_str(), "params validated");

    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "operation": operation.as_str(),
            "params": params,
        }))?
    } else {
        let mut out = format!("status: ok\noperation: {}\nparams:\n", operation.as_str());
        out.push_str(&pretty_json(&params)?);
        out
    };

    Ok(CliOutput::ok(stdout))
}

/// Run `validate-field`: check one key the way a form does on blur.
pub fn run_validate_field(
    mode: OutputMode,
    config: &ValidatedConfig,
    operation: &str,
    field: &str,
    input: &InputArgs,
) -> Result<CliOutput, CliError> {
    let result = parse_operation(operation).and_then(|operation| {
        ensure_declared(operation, field)?;
        let payload = read_payload(input, config.limits().input_max_bytes.get())?;
        validate_operation_field(operation, &payload, field).map(|value| (operation, value))
    });

    let (operation, value) = match result {
        Ok(validated) => validated,
        Err(error) => return Ok(format_error_output(mode, &error)),
    };

    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "operation": operation.as_str(),
            "field": field,
            "value": value,
        }))?
    } else {
        format!(
            "status: ok\noperation: {}\nfield: {field}\nvalue: {}\n",
            operation.as_str(),
            render_value(&value)?
        )
    };

    Ok(CliOutput::ok(stdout))
}

fn parse_operation(name: &str) -> Result<ApiOperation, ErrorEnvelope> {
    name.parse::<ApiOperation>().map_err(ErrorEnvelope::from)
}

// An operator typo is not a programming error, so it is caught before the
// framework turns it into an invariant.
fn ensure_declared(operation: ApiOperation, field: &str) -> Result<(), ErrorEnvelope> {
    if operation.declared_keys().contains(&field) {
        return Ok(());
    }
    Err(ErrorEnvelope::expected(
        ErrorCode::new("cli", "unknown_field"),
        format!("{} has no field {field}", operation.as_str()),
    )
    .with_metadata("operation", operation.as_str())
    .with_metadata("field", field))
}

fn render_value(value: &Value) -> Result<String, CliError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitCode;
    use crate::format::OutputFormat;
    use std::error::Error;
    use swimdesk_config::SwimdeskConfig;

    const JSON: OutputMode = OutputMode {
        format: OutputFormat::Json,
        quiet: true,
    };
    const TEXT: OutputMode = OutputMode {
        format: OutputFormat::Text,
        quiet: true,
    };

    fn config() -> Result<ValidatedConfig, Box<dyn Error>> {
        Ok(SwimdeskConfig::default().validate_and_normalize()?)
    }

    fn inline(json: &str) -> InputArgs {
        InputArgs {
            input_json: Some(json.to_string()),
            input_file: None,
        }
    }

    #[test]
    fn validate_prints_normalized_params() -> Result<(), Box<dyn Error>> {
        let output = run_validate(
            JSON,
            &config()?,
            "member.list",
            &inline(r#"{"maxResults":"20","states":"ACTIVE","junk":1}"#),
        )?;
        assert_eq!(output.exit_code, ExitCode::Ok);

        let value: Value = serde_json::from_str(output.stdout.trim())?;
        assert_eq!(value["operation"], "member.list");
        assert_eq!(
            value["params"],
            serde_json::json!({"maxResults": 20, "startIndex": 0, "states": "ACTIVE"})
        );
        Ok(())
    }

    #[test]
    fn validation_failures_exit_with_invalid_input() -> Result<(), Box<dyn Error>> {
        let output = run_validate(TEXT, &config()?, "member.get", &inline("{}"))?;
        assert_eq!(output.exit_code, ExitCode::InvalidInput);
        assert!(output.stderr.starts_with("error: ERR_VALIDATION_MISSING_VALUE"));
        assert!(output.stderr.contains("user: "));
        Ok(())
    }

    #[test]
    fn unknown_operations_are_reported() -> Result<(), Box<dyn Error>> {
        let output = run_validate(JSON, &config()?, "member.rename", &inline("{}"))?;
        let value: Value = serde_json::from_str(output.stdout.trim())?;
        assert_eq!(output.exit_code, ExitCode::InvalidInput);
        assert_eq!(value["error"]["code"], "ERR_API_UNKNOWN_OPERATION");
        Ok(())
    }

    #[test]
    fn validate_field_returns_the_normalized_value() -> Result<(), Box<dyn Error>> {
        let output = run_validate_field(
            TEXT,
            &config()?,
            "pool.add",
            "lanes",
            &inline(r#"{"lanes":"6"}"#),
        )?;
        assert_eq!(output.exit_code, ExitCode::Ok);
        assert!(output.stdout.ends_with("field: lanes\nvalue: 6\n"));
        Ok(())
    }

    #[test]
    fn validate_field_rejects_undeclared_keys() -> Result<(), Box<dyn Error>> {
        let output = run_validate_field(JSON, &config()?, "pool.add", "depth", &inline("{}"))?;
        let value: Value = serde_json::from_str(output.stdout.trim())?;
        assert_eq!(output.exit_code, ExitCode::InvalidInput);
        assert_eq!(value["error"]["code"], "ERR_CLI_UNKNOWN_FIELD");
        assert_eq!(value["error"]["meta"]["field"], "depth");
        Ok(())
    }
}
