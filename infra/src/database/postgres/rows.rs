//! Row to entity mapping shared by the PostgreSQL repositories.

use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};

use lb_core::domain::entities::{Property, PropertyListing, ReservationListing, User};
use lb_core::errors::DomainError;

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

pub(crate) fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    Ok(User {
        id: column(row, "id")?,
        name: column(row, "name")?,
        email: column(row, "email")?,
        password: column(row, "password")?,
    })
}

pub(crate) fn row_to_property(row: &PgRow) -> Result<Property, DomainError> {
    Ok(Property {
        id: column(row, "id")?,
        owner_id: column(row, "owner_id")?,
        title: column(row, "title")?,
        description: column(row, "description")?,
        thumbnail_photo_url: column(row, "thumbnail_photo_url")?,
        cover_photo_url: column(row, "cover_photo_url")?,
        cost_per_night: column(row, "cost_per_night")?,
        parking_spaces: column(row, "parking_spaces")?,
        number_of_bathrooms: column(row, "number_of_bathrooms")?,
        number_of_bedrooms: column(row, "number_of_bedrooms")?,
        country: column(row, "country")?,
        street: column(row, "street")?,
        city: column(row, "city")?,
        province: column(row, "province")?,
        post_code: column(row, "post_code")?,
        active: column(row, "active")?,
    })
}

pub(crate) fn row_to_property_listing(row: &PgRow) -> Result<PropertyListing, DomainError> {
    Ok(PropertyListing {
        property: row_to_property(row)?,
        average_rating: column(row, "average_rating")?,
    })
}

/// `id` is the property's; the reservation key comes back as `reservation_id`
pub(crate) fn row_to_reservation_listing(row: &PgRow) -> Result<ReservationListing, DomainError> {
    Ok(ReservationListing {
        reservation_id: column(row, "reservation_id")?,
        start_date: column(row, "start_date")?,
        end_date: column(row, "end_date")?,
        property: row_to_property(row)?,
        average_rating: column(row, "average_rating")?,
    })
}
