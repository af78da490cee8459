//! Booking service: the entry points used by the web layer.

mod legacy;
mod service;

pub use legacy::LegacyBookingStore;
pub use service::BookingService;

#[cfg(test)]
mod tests;
