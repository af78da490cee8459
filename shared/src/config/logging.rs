//! Logging configuration consumed by the tracing subscriber.

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    #[default]
    Pretty,
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `lb_infra=debug,sqlx=warn`
    pub level: String,
    pub format: LogFormat,
    /// ANSI colors; only meaningful on a terminal
    pub colored: bool,
    /// Include file and line of each event
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Developers read logs on a terminal; deployed environments ship JSON
    pub fn for_environment(env: Environment) -> Self {
        let deployed = env != Environment::Development;
        let level = match env {
            Environment::Development => "debug",
            Environment::Staging => "info",
            Environment::Production => "warn",
        };

        Self {
            level: level.to_string(),
            format: if deployed { LogFormat::Json } else { LogFormat::Pretty },
            colored: !deployed,
            source_location: !deployed,
        }
    }
}
