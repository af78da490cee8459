//! Unit tests for mock property repository

use crate::domain::entities::property::NewProperty;
use crate::domain::value_objects::{PropertySearchFilter, RowLimit};
use crate::errors::DomainError;
use crate::repositories::property::{MockPropertyRepository, PropertyRepository};

fn new_property(owner_id: i32, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("Stay in {}", city),
        description: None,
        thumbnail_photo_url: "https://images.pexels.com/photos/1/thumb.jpeg".to_string(),
        cover_photo_url: "https://images.pexels.com/photos/1/cover.jpeg".to_string(),
        cost_per_night,
        street: "536 Namsub Highway".to_string(),
        city: city.to_string(),
        province: "BC".to_string(),
        post_code: "V6B 1A1".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
    }
}

async fn seeded_repository() -> MockPropertyRepository {
    let repo = MockPropertyRepository::new();
    // (owner, city, cents, ratings)
    let rows: [(i32, &str, i32, &[i16]); 4] = [
        (1, "Vancouver", 15_000, &[5, 4]),
        (2, "North Vancouver", 8_000, &[3]),
        (1, "Calgary", 30_000, &[2, 2]),
        (3, "Vancouver", 5_000, &[]),
    ];
    for (owner, city, cost, ratings) in rows {
        let created = repo.create(new_property(owner, city, cost)).await.unwrap();
        for rating in ratings {
            repo.add_review(created.id, *rating).await.unwrap();
        }
    }
    repo
}

#[tokio::test]
async fn test_unreviewed_properties_are_not_listed() {
    let repo = seeded_repository().await;
    let listings = repo
        .search(&PropertySearchFilter::new(), RowLimit::default())
        .await
        .unwrap();

    assert_eq!(listings.len(), 3);
    assert!(listings.iter().all(|l| l.average_rating.is_some()));
}

#[tokio::test]
async fn test_results_are_ordered_by_cost() {
    let repo = seeded_repository().await;
    let listings = repo
        .search(&PropertySearchFilter::new(), RowLimit::default())
        .await
        .unwrap();

    let costs: Vec<i32> = listings.iter().map(|l| l.property.cost_per_night).collect();
    assert_eq!(costs, vec![8_000, 15_000, 30_000]);
}

#[tokio::test]
async fn test_city_price_and_rating_filters() {
    let repo = seeded_repository().await;

    let vancouver = repo
        .search(&PropertySearchFilter::new().with_city("Vancouver"), RowLimit::default())
        .await
        .unwrap();
    assert_eq!(vancouver.len(), 2);

    let mid_range = PropertySearchFilter::new()
        .with_minimum_price(100.0)
        .with_maximum_price(200.0);
    let listings = repo.search(&mid_range, RowLimit::default()).await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].property.city, "Vancouver");

    let well_rated = repo
        .search(&PropertySearchFilter::new().with_minimum_rating(3.0), RowLimit::default())
        .await
        .unwrap();
    assert_eq!(well_rated.len(), 2);
    assert_eq!(well_rated[1].average_rating, Some(4.5));
}

#[tokio::test]
async fn test_limit_truncates() {
    let repo = seeded_repository().await;
    let listings = repo
        .search(&PropertySearchFilter::new(), RowLimit::new(1).unwrap())
        .await
        .unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].property.cost_per_night, 8_000);
}

#[tokio::test]
async fn test_no_match_is_empty_not_error() {
    let repo = seeded_repository().await;
    let listings = repo
        .search(&PropertySearchFilter::new().with_owner(404), RowLimit::default())
        .await
        .unwrap();
    assert!(listings.is_empty());
}

#[tokio::test]
async fn test_review_for_unknown_property() {
    let repo = MockPropertyRepository::new();
    let result = repo.add_review(1, 5).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
