//! Tracing subscriber setup.

use swimdesk_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: LoggingConfig, quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second install (tests) keeps the first subscriber.
    let _ = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
