//! PostgreSQL implementation of the ReservationRepository trait.

use async_trait::async_trait;

use lb_core::domain::entities::reservation::ReservationListing;
use lb_core::domain::entities::user::UserId;
use lb_core::domain::value_objects::RowLimit;
use lb_core::errors::DomainError;
use lb_core::query::{BuiltQuery, SqlValue};
use lb_core::repositories::ReservationRepository;

use super::rows::row_to_reservation_listing;
use crate::database::executor::QueryExecutor;

const GUEST_RESERVATIONS: &str = r#"SELECT properties.*,
    reservations.id AS reservation_id,
    reservations.start_date,
    reservations.end_date,
    avg(property_reviews.rating)::float8 AS average_rating
FROM reservations
JOIN properties ON reservations.property_id = properties.id
JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE reservations.guest_id = $1
GROUP BY reservations.id, properties.id
ORDER BY reservations.start_date
LIMIT $2"#;

/// PostgreSQL implementation of ReservationRepository
pub struct PgReservationRepository {
    executor: QueryExecutor,
}

impl PgReservationRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn list_for_guest(
        &self,
        guest_id: UserId,
        limit: RowLimit,
    ) -> Result<Vec<ReservationListing>, DomainError> {
        let query = BuiltQuery::new(
            GUEST_RESERVATIONS,
            vec![SqlValue::from(guest_id), SqlValue::from(limit.as_i64())],
        );

        let rows = self.executor.fetch_multiple(&query).await?;
        rows.iter().map(row_to_reservation_listing).collect()
    }
}
