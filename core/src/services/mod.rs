//! Business services layered on the repositories.

pub mod booking;

pub use booking::{BookingService, LegacyBookingStore};
