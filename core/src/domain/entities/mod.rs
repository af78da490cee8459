//! Domain entities mirroring the rows of the booking store.

pub mod property;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::ReservationListing;
pub use user::{NewUser, User, UserId};
