//! # Infrastructure Layer
//!
//! Concrete implementations behind the LightBnB core: a PostgreSQL pool, the
//! query executor that binds positional parameters, the repository
//! implementations and the tracing subscriber setup.
//!
//! ## Architecture
//!
//! - **Database**: PostgreSQL pool, executor and repositories using SQLx
//! - **Telemetry**: `tracing-subscriber` initialization from [`LoggingConfig`]
//!
//! The pool is created by the process entry point through [`initialize`] or
//! [`InfrastructureServices::initialize`] and shared with every repository.

use std::sync::Arc;

use lb_core::errors::DomainError;
use lb_core::services::{BookingService, LegacyBookingStore};
use sqlx::PgPool;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Tracing subscriber setup
pub mod telemetry;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration types used by the infrastructure layer, re-exported from
    //! the shared crate.

    pub use lb_shared::config::{AppConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig};
}

use crate::config::AppConfig;
use crate::database::{DatabasePool, PgPropertyRepository, PgReservationRepository, PgUserRepository};

/// Booking service wired to the PostgreSQL repositories
pub type PgBookingService = BookingService<PgUserRepository, PgPropertyRepository, PgReservationRepository>;

/// Legacy booking store wired to the PostgreSQL repositories
pub type PgLegacyBookingStore =
    LegacyBookingStore<PgUserRepository, PgPropertyRepository, PgReservationRepository>;

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    pool: DatabasePool,
    booking: PgBookingService,
}

impl InfrastructureServices {
    /// Connect to the database described by `config` and wire the repositories
    pub async fn initialize(config: &AppConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(environment = %config.environment, "Initializing infrastructure services...");

        let pool = DatabasePool::new(config.database.clone()).await?;
        let services = Self::from_pool(pool);

        tracing::info!("Infrastructure services initialized successfully");
        Ok(services)
    }

    /// Wire the repositories onto an existing pool
    pub fn from_pool(pool: DatabasePool) -> Self {
        let executor = pool.executor();
        let booking = BookingService::new(
            Arc::new(PgUserRepository::new(executor.clone())),
            Arc::new(PgPropertyRepository::new(executor.clone())),
            Arc::new(PgReservationRepository::new(executor)),
        );

        Self { pool, booking }
    }

    pub fn booking(&self) -> &PgBookingService {
        &self.booking
    }

    /// Store that reports failures and empty results as `None`
    pub fn legacy_store(&self) -> PgLegacyBookingStore {
        LegacyBookingStore::new(self.booking.clone())
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.get_pool()
    }

    pub fn database(&self) -> &DatabasePool {
        &self.pool
    }

    /// Close the pool; call once during shutdown
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}

/// Initialize infrastructure services
///
/// This function:
/// - Loads `.env`, the environment's config file and `LIGHTBNB__*` overrides
/// - Installs the tracing subscriber
/// - Creates the database pool and wires the repositories
pub async fn initialize() -> Result<InfrastructureServices, InfrastructureError> {
    let config = AppConfig::load()?;

    if let Err(e) = telemetry::init_tracing(&config.logging) {
        // A subscriber installed by the host process wins
        tracing::debug!("Tracing already initialized: {}", e);
    }

    InfrastructureServices::initialize(&config).await
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or statement error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The statement was rejected before reaching the database
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl From<::config::ConfigError> for InfrastructureError {
    fn from(err: ::config::ConfigError) -> Self {
        InfrastructureError::Config(err.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(_) | InfrastructureError::Query(_) => {
                DomainError::query(err.to_string())
            }
            InfrastructureError::Config(_) | InfrastructureError::Telemetry(_) => {
                DomainError::Internal {
                    message: err.to_string(),
                }
            }
        }
    }
}
