//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - The query executor binding positional parameters
//! - Repository implementations for users, properties and reservations

pub mod connection;
pub mod executor;
pub mod postgres;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use executor::QueryExecutor;
pub use postgres::{PgPropertyRepository, PgReservationRepository, PgUserRepository};
