//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level. Installation is
//! process-wide, so a second call reports an error instead of panicking.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::InfrastructureError;

/// Filter from `RUST_LOG`, falling back to `config.level`
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber described by `config`
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| InfrastructureError::Telemetry(e.to_string()))
}
