//! `operations` and `schema` handlers.

use crate::error::CliError;
use crate::format::{OutputMode, pretty_json};
use crate::{CliOutput, format_error_output};
use swimdesk_api::v1::{ApiOperation, operation_schemas, schema_for_operation};
use swimdesk_shared::ErrorEnvelope;

/// Run `operations`: list the catalogue in declaration order.
pub fn run_operations(mode: OutputMode) -> Result<CliOutput, CliError> {
    let stdout = if mode.is_json() {
        let operations: Vec<_> = ApiOperation::ALL
            .iter()
            .map(|operation| {
                serde_json::json!({
                    "name": operation.as_str(),
                    "model": operation.model_name(),
                    "requiresUpdate": operation.requires_update(),
                    "fields": operation.declared_keys(),
                    "required": operation.required_keys(),
                })
            })
            .collect();
        pretty_json(&serde_json::json!({
            "status": "ok",
            "operations": operations,
        }))?
    } else {
        let width = ApiOperation::ALL
            .iter()
            .map(|operation| operation.as_str().len())
            .max()
            .unwrap_or_default();
        let mut out = String::new();
        for operation in ApiOperation::ALL {
            out.push_str(&format!(
                "{:<width$}  {}{}\n",
                operation.as_str(),
                operation.model_name(),
                if operation.requires_update() { " (update)" } else { "" },
            ));
        }
        out
    };

    Ok(CliOutput::ok(stdout))
}

/// Run `schema`: print one operation's JSON Schema, or all keyed by name.
pub fn run_schema(mode: OutputMode, operation: Option<&str>) -> Result<CliOutput, CliError> {
    let Some(name) = operation else {
        return Ok(CliOutput::ok(pretty_json(&operation_schemas())?));
    };

    let operation = match name.parse::<ApiOperation>() {
        Ok(operation) => operation,
        Err(error) => return Ok(format_error_output(mode, &ErrorEnvelope::from(error))),
    };

    Ok(CliOutput::ok(pretty_json(&schema_for_operation(operation))?))
}
