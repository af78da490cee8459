//! Adapter keeping the `Option`-only booking store contract.
//!
//! Every entry point returns `None` both when nothing matched and when the
//! query failed; failures are only visible in the logs. New callers should use
//! [`BookingService`] directly.

use crate::domain::entities::{
    NewProperty, NewUser, Property, PropertyListing, ReservationListing, User, UserId,
};
use crate::domain::value_objects::{PropertySearchFilter, RowLimit};
use crate::query::results::{collapse_multiple, collapse_single};
use crate::repositories::{PropertyRepository, ReservationRepository, UserRepository};

use super::service::BookingService;

/// Booking store with failures and empty results collapsed to `None`
pub struct LegacyBookingStore<U, P, R>
where
    U: UserRepository,
    P: PropertyRepository,
    R: ReservationRepository,
{
    service: BookingService<U, P, R>,
}

impl<U, P, R> LegacyBookingStore<U, P, R>
where
    U: UserRepository,
    P: PropertyRepository,
    R: ReservationRepository,
{
    pub fn new(service: BookingService<U, P, R>) -> Self {
        Self { service }
    }

    pub async fn get_user_with_email(&self, email: &str) -> Option<User> {
        collapse_single(
            "get_user_with_email",
            self.service.get_user_with_email(email).await,
        )
    }

    pub async fn get_user_with_id(&self, id: UserId) -> Option<User> {
        collapse_single("get_user_with_id", self.service.get_user_with_id(id).await)
    }

    pub async fn add_user(&self, user: NewUser) -> Option<User> {
        collapse_single("add_user", self.service.add_user(user).await.map(Some))
    }

    /// `limit` defaults to 10
    pub async fn get_all_reservations(
        &self,
        guest_id: UserId,
        limit: Option<RowLimit>,
    ) -> Option<Vec<ReservationListing>> {
        collapse_multiple(
            "get_all_reservations",
            self.service
                .get_all_reservations(guest_id, limit.unwrap_or_default())
                .await,
        )
    }

    /// `limit` defaults to 10
    pub async fn get_all_properties(
        &self,
        filter: &PropertySearchFilter,
        limit: Option<RowLimit>,
    ) -> Option<Vec<PropertyListing>> {
        collapse_multiple(
            "get_all_properties",
            self.service
                .get_all_properties(filter, limit.unwrap_or_default())
                .await,
        )
    }

    pub async fn add_property(&self, property: NewProperty) -> Option<Property> {
        collapse_single(
            "add_property",
            self.service.add_property(property).await.map(Some),
        )
    }
}
