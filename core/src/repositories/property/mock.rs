//! Mock implementation of PropertyRepository for testing
//!
//! Search mirrors the SQL statement: only reviewed properties are listed,
//! `city` is a case-sensitive substring match, prices are dollars compared
//! against cents, and results are ordered by nightly cost.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::property::{NewProperty, Property, PropertyListing};
use crate::domain::value_objects::{PropertySearchFilter, RowLimit};
use crate::errors::DomainError;

use super::r#trait::PropertyRepository;

struct StoredProperty {
    property: Property,
    ratings: Vec<i16>,
}

impl StoredProperty {
    fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: f64 = self.ratings.iter().map(|r| f64::from(*r)).sum();
        Some(total / self.ratings.len() as f64)
    }

    fn matches(&self, filter: &PropertySearchFilter) -> bool {
        let p = &self.property;
        let cost = f64::from(p.cost_per_night);

        filter.city().map_or(true, |city| p.city.contains(city))
            && filter
                .minimum_price_per_night
                .map_or(true, |min| cost >= min * 100.0)
            && filter
                .maximum_price_per_night
                .map_or(true, |max| cost <= max * 100.0)
            && filter.owner_id.map_or(true, |owner| p.owner_id == owner)
    }
}

/// In-memory property store
pub struct MockPropertyRepository {
    properties: RwLock<Vec<StoredProperty>>,
    unavailable: AtomicBool,
}

impl MockPropertyRepository {
    pub fn new() -> Self {
        Self {
            properties: RwLock::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Record a review rating for an existing property
    pub async fn add_review(&self, property_id: i32, rating: i16) -> Result<(), DomainError> {
        let mut properties = self.properties.write().await;
        let stored = properties
            .iter_mut()
            .find(|s| s.property.id == property_id)
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("property {}", property_id),
            })?;
        stored.ratings.push(rating);
        Ok(())
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::query("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn search(
        &self,
        filter: &PropertySearchFilter,
        limit: RowLimit,
    ) -> Result<Vec<PropertyListing>, DomainError> {
        self.check_available()?;
        let properties = self.properties.read().await;

        let mut listings: Vec<PropertyListing> = properties
            .iter()
            .filter(|s| s.matches(filter))
            .filter_map(|s| {
                let average = s.average_rating()?;
                let rated_enough = filter.minimum_rating.map_or(true, |min| average >= min);
                rated_enough.then(|| PropertyListing {
                    property: s.property.clone(),
                    average_rating: Some(average),
                })
            })
            .collect();

        listings.sort_by_key(|l| l.property.cost_per_night);
        listings.truncate(limit.get() as usize);
        Ok(listings)
    }

    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        self.check_available()?;
        let mut properties = self.properties.write().await;
        let id = properties.iter().map(|s| s.property.id).max().unwrap_or(0) + 1;
        let stored = property.into_property(id);
        properties.push(StoredProperty {
            property: stored.clone(),
            ratings: Vec::new(),
        });
        Ok(stored)
    }
}
