//! Deployment environment detection.
//!
//! The environment picks the configuration defaults and the name of the
//! optional `config.<env>.toml` file layered on top of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variables consulted, in order, by [`Environment::from_env`]
pub const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Deployment the booking store runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local database, verbose statement logging
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Canonical lowercase name, as used in file names and logs
    pub fn name(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// First parseable value of [`ENVIRONMENT_VARS`], else development
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// `config.<name>.toml`
    pub fn config_file(self) -> String {
        format!("config.{}.toml", self.name())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_parse() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!(" local ".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("test".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Production));
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_config_file_follows_name() {
        assert_eq!(Environment::Development.config_file(), "config.development.toml");
        assert_eq!(Environment::Staging.config_file(), "config.staging.toml");
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
