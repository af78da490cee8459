//! Optional constraints for property search.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UserId;

/// Filter set for property search.
///
/// Every field is optional and an absent field places no constraint on the
/// result. Prices are in dollars per night.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySearchFilter {
    /// Substring of the city name
    pub city: Option<String>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub owner_id: Option<UserId>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertySearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_minimum_price(mut self, dollars: f64) -> Self {
        self.minimum_price_per_night = Some(dollars);
        self
    }

    pub fn with_maximum_price(mut self, dollars: f64) -> Self {
        self.maximum_price_per_night = Some(dollars);
        self
    }

    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// The city constraint, if any. Blank input counts as no constraint.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Number of constraints that will reach the query
    pub fn active_filters(&self) -> usize {
        [
            self.city().is_some(),
            self.minimum_price_per_night.is_some(),
            self.maximum_price_per_night.is_some(),
            self.owner_id.is_some(),
            self.minimum_rating.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_filters() == 0
    }
}
