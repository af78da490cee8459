//! Shared utilities and common types for the LightBnB data layer
//!
//! This crate provides functionality used by both the core and the
//! infrastructure crates:
//! - Configuration types and layered loading
//! - Email normalization used before lookups and inserts

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig};
pub use utils::normalize_email;
