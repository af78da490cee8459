//! # LightBnB Core
//!
//! Domain layer of the LightBnB data access layer: entities, search filters,
//! the parameterized query builder, repository interfaces and the booking
//! service. Nothing in this crate talks to a database directly.

pub mod domain;
pub mod errors;
pub mod query;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use query::{build_property_search, BuiltQuery, SqlValue};
pub use repositories::{
    MockPropertyRepository, MockReservationRepository, MockUserRepository, PropertyRepository,
    ReservationRepository, UserRepository,
};
pub use services::*;
