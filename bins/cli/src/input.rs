//! Payload intake for `validate` and `validate-field`.

use clap::Args;
use serde_json::Value;
use std::io::{self, Read};
use std::path::PathBuf;
use swimdesk_shared::{ErrorCode, ErrorEnvelope};

/// Where the params payload comes from. Stdin when neither flag is set.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Params payload as inline JSON.
    #[arg(long, conflicts_with = "input_file")]
    pub input_json: Option<String>,
    /// Path to a file holding the params payload.
    #[arg(long)]
    pub input_file: Option<PathBuf>,
}

/// Read and parse the payload, refusing anything above `max_bytes`.
pub fn read_payload(args: &InputArgs, max_bytes: u64) -> Result<Value, ErrorEnvelope> {
    let text = match (&args.input_json, &args.input_file) {
        (Some(inline), _) => {
            ensure_within_limit(inline.len() as u64, max_bytes, "inline")?;
            inline.clone()
        },
        (None, Some(path)) => {
            let file = std::fs::File::open(path).map_err(|error| {
                ErrorEnvelope::from(error).with_metadata("path", path.to_string_lossy().to_string())
            })?;
            read_bounded(file, max_bytes, "file")?
        },
        (None, None) => read_bounded(io::stdin().lock(), max_bytes, "stdin")?,
    };

    serde_json::from_str(&text).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("cli", "invalid_json"),
            format!("input is not valid JSON: {error}"),
        )
    })
}

fn read_bounded<R: Read>(reader: R, max_bytes: u64, source: &str) -> Result<String, ErrorEnvelope> {
    let mut bytes = Vec::new();
    // One extra byte tells an exact fit apart from an overflow.
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;
    ensure_within_limit(bytes.len() as u64, max_bytes, source)?;
    String::from_utf8(bytes).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("cli", "invalid_json"),
            format!("input is not valid UTF-8: {error}"),
        )
        .with_metadata("source", source)
    })
}

fn ensure_within_limit(len: u64, max_bytes: u64, source: &str) -> Result<(), ErrorEnvelope> {
    if len <= max_bytes {
        return Ok(());
    }
    tracing::debug!(source, max_bytes, "input rejected by size limit");
    Err(ErrorEnvelope::expected(
        ErrorCode::new("cli", "input_too_large"),
        format!("input exceeds {max_bytes} bytes"),
    )
    .with_metadata("source", source)
    .with_metadata("maxBytes", max_bytes.to_string()))
}
