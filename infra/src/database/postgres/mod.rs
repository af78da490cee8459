//! PostgreSQL repository implementations.

mod rows;

pub mod property_repository_impl;
pub mod reservation_repository_impl;
pub mod user_repository_impl;

pub use property_repository_impl::PgPropertyRepository;
pub use reservation_repository_impl::PgReservationRepository;
pub use user_repository_impl::PgUserRepository;
