//! Booking service exposing users, reservations and property search.
//!
//! Single lookups return `Ok(None)` when nothing matched and listings return an
//! empty vector, so callers can tell "no data" apart from a failed query.

use std::sync::Arc;

use lb_shared::normalize_email;
use validator::Validate;

use crate::domain::entities::{
    NewProperty, NewUser, Property, PropertyListing, ReservationListing, User, UserId,
};
use crate::domain::value_objects::{PropertySearchFilter, RowLimit};
use crate::errors::DomainResult;
use crate::repositories::{PropertyRepository, ReservationRepository, UserRepository};

/// Entry points of the booking store
pub struct BookingService<U, P, R>
where
    U: UserRepository,
    P: PropertyRepository,
    R: ReservationRepository,
{
    users: Arc<U>,
    properties: Arc<P>,
    reservations: Arc<R>,
}

impl<U, P, R> Clone for BookingService<U, P, R>
where
    U: UserRepository,
    P: PropertyRepository,
    R: ReservationRepository,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            properties: Arc::clone(&self.properties),
            reservations: Arc::clone(&self.reservations),
        }
    }
}

impl<U, P, R> BookingService<U, P, R>
where
    U: UserRepository,
    P: PropertyRepository,
    R: ReservationRepository,
{
    pub fn new(users: Arc<U>, properties: Arc<P>, reservations: Arc<R>) -> Self {
        Self {
            users,
            properties,
            reservations,
        }
    }

    /// Look up a user by email, ignoring case
    pub async fn get_user_with_email(&self, email: &str) -> DomainResult<Option<User>> {
        let email = normalize_email(email);
        tracing::debug!(email = %email, "Looking up user by email");
        self.users.find_by_email(&email).await
    }

    pub async fn get_user_with_id(&self, id: UserId) -> DomainResult<Option<User>> {
        tracing::debug!(user_id = id, "Looking up user by id");
        self.users.find_by_id(id).await
    }

    /// Register a user; the email is stored trimmed and lowercased
    pub async fn add_user(&self, user: NewUser) -> DomainResult<User> {
        let user = NewUser {
            email: normalize_email(&user.email),
            ..user
        };
        user.validate()?;

        let created = self.users.create(user).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    /// Reservations of `guest_id`, earliest first
    pub async fn get_all_reservations(
        &self,
        guest_id: UserId,
        limit: RowLimit,
    ) -> DomainResult<Vec<ReservationListing>> {
        let reservations = self.reservations.list_for_guest(guest_id, limit).await?;
        tracing::debug!(guest_id, count = reservations.len(), "Listed reservations");
        Ok(reservations)
    }

    /// Reviewed properties matching `filter`, cheapest first
    pub async fn get_all_properties(
        &self,
        filter: &PropertySearchFilter,
        limit: RowLimit,
    ) -> DomainResult<Vec<PropertyListing>> {
        let listings = self.properties.search(filter, limit).await?;
        tracing::debug!(
            filters = filter.active_filters(),
            %limit,
            count = listings.len(),
            "Property search completed"
        );
        Ok(listings)
    }

    pub async fn add_property(&self, property: NewProperty) -> DomainResult<Property> {
        property.validate()?;
        let created = self.properties.create(property).await?;
        tracing::info!(property_id = created.id, owner_id = created.owner_id, "Property created");
        Ok(created)
    }
}
