//! Configuration module
//!
//! Configuration is split by concern:
//! - `database` - PostgreSQL connection and pool configuration
//! - `environment` - Deployment environment detection
//! - `logging` - Tracing subscriber settings
//!
//! [`AppConfig::load`] layers, from lowest to highest precedence, the defaults
//! for the detected environment, an optional `config.<env>.toml` file, and
//! `LIGHTBNB__*` environment variables (e.g. `LIGHTBNB__DATABASE__URL`).

pub mod database;
pub mod environment;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use logging::{LogFormat, LoggingConfig};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "LIGHTBNB";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig::new("postgres://localhost:5432/lightbnb_dev")
                .with_logging(true),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig::new("postgres://db:5432/lightbnb").with_max_connections(50),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Defaults for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.database.enable_logging = false;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration from environment variables only.
    ///
    /// `DATABASE_URL` and friends override the environment defaults.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = Self::for_environment(env);
        config.database = DatabaseConfig::from_env_with_defaults(config.database);
        config
    }

    /// Load layered configuration.
    ///
    /// Reads `.env` first (if present), then builds the configuration from the
    /// environment defaults, `config.<env>.toml` and `LIGHTBNB__*` variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        dotenvy::dotenv().ok();
        let env = Environment::from_env();
        Self::load_from(env, &env.config_file())
    }

    /// Load layered configuration using an explicit file path.
    ///
    /// A missing file is not an error.
    pub fn load_from(env: Environment, file: &str) -> Result<Self, ::config::ConfigError> {
        let defaults = Self::from_env_defaults(env);

        ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(::config::File::with_name(file).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn from_env_defaults(env: Environment) -> Self {
        let mut config = Self::for_environment(env);
        config.database = DatabaseConfig::from_env_with_defaults(config.database);
        config
    }
}
