//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User, UserId};
use crate::errors::DomainError;

/// Repository trait for User persistence operations
///
/// Implementations store emails exactly as given; normalization happens in
/// the booking service before any call reaches the repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user has this email
    /// * `Err(DomainError)` - The query failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by primary key
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this ID
    /// * `Err(DomainError)` - The query failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Insert a user and return the stored row
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
