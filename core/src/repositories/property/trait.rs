//! Property repository trait.

use async_trait::async_trait;

use crate::domain::entities::property::{NewProperty, Property, PropertyListing};
use crate::domain::value_objects::{PropertySearchFilter, RowLimit};
use crate::errors::DomainError;

/// Repository trait for property search and listing
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Reviewed properties matching `filter`, cheapest first, at most `limit`.
    ///
    /// # Returns
    /// * `Ok(listings)` - possibly empty when nothing matched
    /// * `Err(DomainError)` - the query failed
    async fn search(
        &self,
        filter: &PropertySearchFilter,
        limit: RowLimit,
    ) -> Result<Vec<PropertyListing>, DomainError>;

    /// Insert a property and return the stored row
    async fn create(&self, property: NewProperty) -> Result<Property, DomainError>;
}
