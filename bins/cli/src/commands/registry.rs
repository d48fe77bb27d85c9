//! `registry` handler.

use crate::error::CliError;
use crate::format::{OutputMode, pretty_json};
use crate::{CliOutput, format_error_output};
use swimdesk_domain::{all_registries, registry_by_name};
use swimdesk_shared::{ErrorCode, ErrorEnvelope};
use swimdesk_validation::RegistrySnapshot;

/// Run `registry`: list registry names, or the entries of one registry.
pub fn run_registry(mode: OutputMode, name: Option<&str>) -> Result<CliOutput, CliError> {
    let Some(name) = name else {
        return list_registries(mode);
    };

    let Some(snapshot) = registry_by_name(name) else {
        let error = ErrorEnvelope::expected(
            ErrorCode::new("cli", "unknown_registry"),
            format!("unknown registry: {name}"),
        )
        .with_metadata("registry", name);
        return Ok(format_error_output(mode, &error));
    };

    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "registry": snapshot,
        }))?
    } else {
        format_snapshot_text(&snapshot)
    };

    Ok(CliOutput::ok(stdout))
}

fn list_registries(mode: OutputMode) -> Result<CliOutput, CliError> {
    let registries = all_registries();

    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "registries": registries,
        }))?
    } else {
        registries
            .iter()
            .map(|snapshot| format!("{} ({} keys)\n", snapshot.name, snapshot.entries.len()))
            .collect()
    };

    Ok(CliOutput::ok(stdout))
}

fn format_snapshot_text(snapshot: &RegistrySnapshot) -> String {
    let width = snapshot
        .entries
        .iter()
        .map(|entry| entry.key.len())
        .max()
        .unwrap_or_default();

    let mut out = format!("{}\n", snapshot.name);
    for entry in &snapshot.entries {
        out.push_str(&format!("  {:<width$}  {}\n", entry.key, entry.description));
    }
    out
}
