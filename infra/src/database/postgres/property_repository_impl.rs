//! PostgreSQL implementation of the PropertyRepository trait.
//!
//! Search statements come from [`build_property_search`]; this module only
//! executes them and maps the rows.

use async_trait::async_trait;

use lb_core::domain::entities::property::{NewProperty, Property, PropertyListing};
use lb_core::domain::value_objects::{PropertySearchFilter, RowLimit};
use lb_core::errors::DomainError;
use lb_core::query::{build_property_search, BuiltQuery, SqlValue};
use lb_core::repositories::PropertyRepository;

use super::rows::{row_to_property, row_to_property_listing};
use crate::database::executor::QueryExecutor;

const INSERT_PROPERTY: &str = r#"INSERT INTO properties (
    owner_id, title, description, thumbnail_photo_url, cover_photo_url,
    cost_per_night, street, city, province, post_code, country,
    parking_spaces, number_of_bathrooms, number_of_bedrooms
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING *"#;

/// PostgreSQL implementation of PropertyRepository
pub struct PgPropertyRepository {
    executor: QueryExecutor,
}

impl PgPropertyRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn search(
        &self,
        filter: &PropertySearchFilter,
        limit: RowLimit,
    ) -> Result<Vec<PropertyListing>, DomainError> {
        let query = build_property_search(filter, limit);
        let rows = self.executor.fetch_multiple(&query).await?;
        rows.iter().map(row_to_property_listing).collect()
    }

    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        let params: Vec<SqlValue> = vec![
            property.owner_id.into(),
            property.title.into(),
            property.description.into(),
            property.thumbnail_photo_url.into(),
            property.cover_photo_url.into(),
            property.cost_per_night.into(),
            property.street.into(),
            property.city.into(),
            property.province.into(),
            property.post_code.into(),
            property.country.into(),
            property.parking_spaces.into(),
            property.number_of_bathrooms.into(),
            property.number_of_bedrooms.into(),
        ];

        let row = self
            .executor
            .fetch_single(&BuiltQuery::new(INSERT_PROPERTY, params))
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: "INSERT INTO properties returned no row".to_string(),
            })?;

        row_to_property(&row)
    }
}
