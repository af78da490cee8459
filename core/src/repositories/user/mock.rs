//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User, UserId};
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// In-memory user store with serial IDs
pub struct MockUserRepository {
    users: RwLock<Vec<User>>,
    unavailable: AtomicBool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::query("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let stored = User {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
        };
        users.push(stored.clone());
        Ok(stored)
    }
}
