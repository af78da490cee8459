//! Reservation listing returned for a guest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::property::Property;

/// A reserved property with the reservation dates and the property's
/// average rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListing {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}
