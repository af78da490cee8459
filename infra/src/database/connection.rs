//! Database connection pool management
//!
//! Wraps a SQLx PostgreSQL pool configured from [`DatabaseConfig`]. The pool is
//! created by the process entry point and handed to the executor; nothing in
//! this crate keeps a global connection.

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::database::executor::QueryExecutor;
use crate::InfrastructureError;

/// URL schemes accepted by [`DatabasePool`]
const SUPPORTED_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx PostgreSQL connection pool
    pool: PgPool,
    /// Configuration used to create this pool
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Example
    /// ```no_run
    /// use lb_infra::config::DatabaseConfig;
    /// use lb_infra::database::DatabasePool;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::new("postgres://labber@localhost/lightbnb")
    ///         .with_max_connections(10);
    ///     let pool = DatabasePool::new(config).await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let connect_options = Self::connect_options(&config)?;
        let pool = Self::pool_options(&config)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool, config })
    }

    /// Create a pool that connects on first use
    pub fn new_lazy(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let connect_options = Self::connect_options(&config)?;
        let pool = Self::pool_options(&config).connect_lazy_with(connect_options);
        Ok(Self { pool, config })
    }

    fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, InfrastructureError> {
        if !SUPPORTED_SCHEMES
            .iter()
            .any(|scheme| config.url.starts_with(scheme))
        {
            return Err(InfrastructureError::Config(
                "Database URL must start with postgres:// or postgresql://".to_string(),
            ));
        }

        let options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

        let statement_level = if config.enable_logging {
            LevelFilter::Debug
        } else {
            LevelFilter::Trace
        };

        Ok(options
            .log_statements(statement_level)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            ))
    }

    fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Configuration the pool was built from
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Executor sharing this pool
    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(self.pool.clone())
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let result = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        let value: i32 = sqlx::Row::try_get(&result, 0).unwrap_or(0);

        if value == 1 {
            tracing::debug!("Database health check passed");
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

/// Connection pool statistics
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
