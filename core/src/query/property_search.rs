//! Filtered property search.

use super::builder::{BuiltQuery, SelectBuilder};
use crate::domain::value_objects::{PropertySearchFilter, RowLimit};

/// Properties joined with their reviews; only reviewed properties are listed
pub const PROPERTY_SEARCH_BASE: &str = "
SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Build the search statement for `filter`, cheapest first, at most `limit` rows.
///
/// Predicates are added in a fixed order (city, minimum price, maximum price,
/// owner) so equal filters always produce identical SQL. Prices are given in
/// dollars and compared against `cost_per_night` in cents.
pub fn build_property_search(filter: &PropertySearchFilter, limit: RowLimit) -> BuiltQuery {
    let mut query = SelectBuilder::new(PROPERTY_SEARCH_BASE);

    if let Some(city) = filter.city() {
        query.filter(format!("%{}%", city), |p| format!("city LIKE {}", p));
    }
    if let Some(minimum) = filter.minimum_price_per_night {
        query.filter(minimum, |p| format!("cost_per_night >= {} * 100", p));
    }
    if let Some(maximum) = filter.maximum_price_per_night {
        query.filter(maximum, |p| format!("cost_per_night <= {} * 100", p));
    }
    if let Some(owner_id) = filter.owner_id {
        query.filter(owner_id, |p| format!("owner_id = {}", p));
    }

    // the aggregate only exists once rows are grouped
    let mut query = query.group_by("properties.id");

    if let Some(rating) = filter.minimum_rating {
        query.having(rating, |p| format!("avg(property_reviews.rating) >= {}", p));
    }

    query.order_by_with_limit("cost_per_night", limit)
}
