//! Shared fixtures for booking service tests

use std::sync::Arc;

use crate::domain::entities::NewProperty;
use crate::repositories::{MockPropertyRepository, MockReservationRepository, MockUserRepository};
use crate::services::booking::BookingService;

pub type MockBookingService =
    BookingService<MockUserRepository, MockPropertyRepository, MockReservationRepository>;

pub struct Harness {
    pub users: Arc<MockUserRepository>,
    pub properties: Arc<MockPropertyRepository>,
    pub reservations: Arc<MockReservationRepository>,
    pub service: MockBookingService,
}

pub fn harness() -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let properties = Arc::new(MockPropertyRepository::new());
    let reservations = Arc::new(MockReservationRepository::new());
    let service = BookingService::new(
        Arc::clone(&users),
        Arc::clone(&properties),
        Arc::clone(&reservations),
    );

    Harness {
        users,
        properties,
        reservations,
        service,
    }
}

pub fn new_property(owner_id: i32, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("Cozy place in {}", city),
        description: Some("A quiet spot".to_string()),
        thumbnail_photo_url: "https://images.pexels.com/photos/3/thumb.jpeg".to_string(),
        cover_photo_url: "https://images.pexels.com/photos/3/cover.jpeg".to_string(),
        cost_per_night,
        street: "651 Nami Road".to_string(),
        city: city.to_string(),
        province: "Ontario".to_string(),
        post_code: "M5V 2T6".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 0,
        number_of_bathrooms: 2,
        number_of_bedrooms: 3,
    }
}
