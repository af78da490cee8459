//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;

use lb_core::domain::entities::user::{NewUser, User, UserId};
use lb_core::errors::DomainError;
use lb_core::query::{BuiltQuery, SqlValue};
use lb_core::repositories::UserRepository;

use super::rows::row_to_user;
use crate::database::executor::QueryExecutor;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    executor: QueryExecutor,
}

impl PgUserRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }

    async fn find_one(&self, query: BuiltQuery) -> Result<Option<User>, DomainError> {
        self.executor
            .fetch_single(&query)
            .await?
            .map(|row| row_to_user(&row))
            .transpose()
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one(BuiltQuery::new(
            "SELECT * FROM users WHERE email = $1",
            vec![SqlValue::from(email)],
        ))
        .await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.find_one(BuiltQuery::new(
            "SELECT * FROM users WHERE id = $1",
            vec![SqlValue::from(id)],
        ))
        .await
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = BuiltQuery::new(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *",
            vec![user.name.into(), user.email.into(), user.password.into()],
        );

        self.find_one(query).await?.ok_or_else(|| DomainError::Internal {
            message: "INSERT INTO users returned no row".to_string(),
        })
    }
}
