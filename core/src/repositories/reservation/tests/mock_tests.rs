//! Unit tests for mock reservation repository

use chrono::NaiveDate;

use crate::domain::entities::property::NewProperty;
use crate::domain::entities::reservation::ReservationListing;
use crate::domain::value_objects::RowLimit;
use crate::repositories::reservation::{MockReservationRepository, ReservationRepository};

fn listing(reservation_id: i32, start: (i32, u32, u32)) -> ReservationListing {
    let property = NewProperty {
        owner_id: 1,
        title: "Speed lamp".to_string(),
        description: Some("description".to_string()),
        thumbnail_photo_url: "https://images.pexels.com/photos/2/thumb.jpeg".to_string(),
        cover_photo_url: "https://images.pexels.com/photos/2/cover.jpeg".to_string(),
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
    .into_property(1);

    let start_date = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
    ReservationListing {
        reservation_id,
        start_date,
        end_date: start_date + chrono::Duration::days(3),
        property,
        average_rating: Some(4.0),
    }
}

#[tokio::test]
async fn test_lists_only_guest_reservations_by_start_date() {
    let repo = MockReservationRepository::new();
    repo.add(1, listing(10, (2019, 9, 1))).await;
    repo.add(1, listing(11, (2018, 1, 15))).await;
    repo.add(2, listing(12, (2017, 5, 5))).await;

    let listings = repo.list_for_guest(1, RowLimit::default()).await.unwrap();
    let ids: Vec<i32> = listings.iter().map(|l| l.reservation_id).collect();
    assert_eq!(ids, vec![11, 10]);
}

#[tokio::test]
async fn test_limit_and_empty_guest() {
    let repo = MockReservationRepository::new();
    repo.add(1, listing(10, (2019, 9, 1))).await;
    repo.add(1, listing(11, (2018, 1, 15))).await;

    let limited = repo.list_for_guest(1, RowLimit::new(1).unwrap()).await.unwrap();
    assert_eq!(limited.len(), 1);

    let none = repo.list_for_guest(3, RowLimit::default()).await.unwrap();
    assert!(none.is_empty());
}
