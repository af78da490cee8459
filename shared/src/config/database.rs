//! Database configuration module

use serde::{Deserialize, Serialize};

/// Database configuration for PostgreSQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Enable SQL statement logging
    #[serde(default)]
    pub enable_logging: bool,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("postgres://localhost:5432/lightbnb"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            enable_logging: false,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_env_with_defaults(Self::default())
    }

    /// Override `defaults` with `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`
    /// and `DATABASE_CONNECT_TIMEOUT` when they are set and parse.
    pub fn from_env_with_defaults(defaults: Self) -> Self {
        let url = std::env::var("DATABASE_URL").unwrap_or(defaults.url);
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_connections);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.connect_timeout);

        Self {
            url,
            max_connections,
            connect_timeout,
            ..defaults
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the connection timeout in seconds
    pub fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout = seconds;
        self
    }

    /// Enable SQL statement logging
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }

    /// Check if this is a production database
    pub fn is_production(&self) -> bool {
        !self.url.contains("localhost") && !self.url.contains("127.0.0.1")
    }
}

fn default_slow_query_threshold() -> u64 {
    1000 // 1 second
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_setters() {
        let config = DatabaseConfig::new("postgres://db.internal/lightbnb")
            .with_max_connections(25)
            .with_connect_timeout(5)
            .with_logging(true);

        assert_eq!(config.max_connections, 25);
        assert_eq!(config.connect_timeout, 5);
        assert!(config.enable_logging);
        assert!(config.is_production());
    }

    #[test]
    fn test_localhost_is_not_production() {
        assert!(!DatabaseConfig::default().is_production());
    }

    #[test]
    fn test_slow_query_threshold_defaults_when_missing() {
        let json = r#"{
            "url": "postgres://localhost/lightbnb",
            "max_connections": 3,
            "connect_timeout": 10,
            "idle_timeout": 60,
            "max_lifetime": 120
        }"#;
        let config: DatabaseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.slow_query_threshold, 1000);
        assert!(!config.enable_logging);
    }
}
