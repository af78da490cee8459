//! Reservation repository module.

mod r#trait;
pub use r#trait::ReservationRepository;

mod mock;
pub use mock::MockReservationRepository;

#[cfg(test)]
mod tests;
