//! Info command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, pretty_json};
use swimdesk_api::api_crate_version;
use swimdesk_api::v1::ApiOperation;
use swimdesk_config::config_crate_version;
use swimdesk_domain::{all_registries, domain_crate_version};

/// Run the info command.
pub fn run_info(mode: OutputMode) -> Result<CliOutput, CliError> {
    let operations = ApiOperation::ALL.len();
    let registries = all_registries().len();

    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "build": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "apiVersion": api_crate_version(),
                "configVersion": config_crate_version(),
                "domainVersion": domain_crate_version(),
            },
            "operations": operations,
            "registries": registries,
        }))?
    } else {
        format!(
            "status: ok\nname: {}\nversion: {}\napi: {}\nconfig: {}\ndomain: {}\noperations: {operations}\nregistries: {registries}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            api_crate_version(),
            config_crate_version(),
            domain_crate_version(),
        )
    };

    Ok(CliOutput::ok(stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use std::error::Error;

    #[test]
    fn info_json_output_shape() -> Result<(), Box<dyn Error>> {
        let mode = OutputMode {
            format: OutputFormat::Json,
            quiet: true,
        };
        let value: serde_json::Value = serde_json::from_str(run_info(mode)?.stdout.trim())?;

        assert_eq!(value["status"], "ok");
        assert_eq!(value["build"]["name"], "swimdesk-cli");
        assert_eq!(value["operations"], 32);
        for key in ["version", "apiVersion", "configVersion", "domainVersion"] {
            assert!(value["build"].get(key).is_some(), "missing {key}");
        }
        Ok(())
    }
}
