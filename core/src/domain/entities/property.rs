//! Property entities.
//!
//! `cost_per_night` is stored in cents, while search filters are expressed in
//! dollars.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserId;

/// A row of the `properties` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in cents
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// A property together with the average rating of its reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Fields required to list a new property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewProperty {
    pub owner_id: UserId,
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url(message = "must be an absolute URL"))]
    pub thumbnail_photo_url: String,
    #[validate(url(message = "must be an absolute URL"))]
    pub cover_photo_url: String,
    /// Nightly cost in cents
    #[validate(range(min = 0, message = "must not be negative"))]
    pub cost_per_night: i32,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub street: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub country: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub parking_spaces: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub number_of_bathrooms: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    /// Materialize the row the store would return for this insert
    pub fn into_property(self, id: i32) -> Property {
        Property {
            id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: self.cost_per_night,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
            country: self.country,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> NewProperty {
        NewProperty {
            owner_id: 2,
            title: "Speed lamp".to_string(),
            description: None,
            thumbnail_photo_url: "https://images.pexels.com/photos/2086676/thumb.jpeg".to_string(),
            cover_photo_url: "https://images.pexels.com/photos/2086676/cover.jpeg".to_string(),
            cost_per_night: 93_061,
            street: "536 Namsub Highway".to_string(),
            city: "Sotboske".to_string(),
            province: "Quebec".to_string(),
            post_code: "28142".to_string(),
            country: "Canada".to_string(),
            parking_spaces: 6,
            number_of_bathrooms: 4,
            number_of_bedrooms: 8,
        }
    }

    #[test]
    fn test_valid_listing_passes() {
        assert!(listing().validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_are_reported() {
        let property = NewProperty {
            title: String::new(),
            thumbnail_photo_url: "thumb.jpeg".to_string(),
            cost_per_night: -1,
            number_of_bedrooms: -2,
            ..listing()
        };

        let errors = property.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("thumbnail_photo_url"));
        assert!(fields.contains_key("cost_per_night"));
        assert!(fields.contains_key("number_of_bedrooms"));
        assert!(!fields.contains_key("cover_photo_url"));
    }

    #[test]
    fn test_into_property_is_active() {
        let property = listing().into_property(17);
        assert_eq!(property.id, 17);
        assert!(property.active);
        assert_eq!(property.cost_per_night, 93_061);
    }
}
