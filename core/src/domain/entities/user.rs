//! User entity representing a registered guest or owner.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Primary key of the `users` table
pub type UserId = i32;

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Always stored lowercased
    pub email: String,
    /// Opaque credential supplied by the caller; this layer never inspects it
    pub password: String,
}

/// Fields required to register a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Stored as given; hashing happens before this layer
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
