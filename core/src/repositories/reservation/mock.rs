//! Mock implementation of ReservationRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::reservation::ReservationListing;
use crate::domain::entities::user::UserId;
use crate::domain::value_objects::RowLimit;
use crate::errors::DomainError;

use super::r#trait::ReservationRepository;

/// In-memory reservation store keyed by guest
pub struct MockReservationRepository {
    reservations: RwLock<Vec<(UserId, ReservationListing)>>,
    unavailable: AtomicBool,
}

impl MockReservationRepository {
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn add(&self, guest_id: UserId, listing: ReservationListing) {
        self.reservations.write().await.push((guest_id, listing));
    }
}

impl Default for MockReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for MockReservationRepository {
    async fn list_for_guest(
        &self,
        guest_id: UserId,
        limit: RowLimit,
    ) -> Result<Vec<ReservationListing>, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::query("connection refused"));
        }

        let reservations = self.reservations.read().await;
        let mut listings: Vec<ReservationListing> = reservations
            .iter()
            .filter(|(guest, _)| *guest == guest_id)
            .map(|(_, listing)| listing.clone())
            .collect();

        listings.sort_by_key(|l| l.start_date);
        listings.truncate(limit.get() as usize);
        Ok(listings)
    }
}
