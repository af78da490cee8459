//! Reservation repository trait.

use async_trait::async_trait;

use crate::domain::entities::reservation::ReservationListing;
use crate::domain::entities::user::UserId;
use crate::domain::value_objects::RowLimit;
use crate::errors::DomainError;

/// Repository trait for a guest's reservations
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reservations made by `guest_id`, earliest start date first
    async fn list_for_guest(
        &self,
        guest_id: UserId,
        limit: RowLimit,
    ) -> Result<Vec<ReservationListing>, DomainError>;
}
