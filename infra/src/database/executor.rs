//! Query executor.
//!
//! Runs a [`BuiltQuery`] against the pool, binding its parameters in order.
//! The statement's placeholders are checked against the parameter list before
//! any round trip, so a drifted index never reaches the server.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use lb_core::query::{first_row, BuiltQuery, SqlValue};

use crate::InfrastructureError;

/// Executes parameterized statements on a shared pool
#[derive(Clone)]
pub struct QueryExecutor {
    pool: PgPool,
}

impl QueryExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run `query` and return every row
    pub async fn execute(&self, query: &BuiltQuery) -> Result<Vec<PgRow>, InfrastructureError> {
        query
            .check_placeholders()
            .map_err(|e| InfrastructureError::Query(e.to_string()))?;

        tracing::debug!(
            sql = query.sql(),
            params = query.params().len(),
            "Executing statement"
        );

        bind_params(sqlx::query(query.sql()), query.params())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Statement failed");
                InfrastructureError::Database(e)
            })
    }

    /// First row, or `None` when nothing matched
    pub async fn fetch_single(&self, query: &BuiltQuery) -> Result<Option<PgRow>, InfrastructureError> {
        self.execute(query).await.map(first_row)
    }

    /// All rows; empty when nothing matched
    pub async fn fetch_multiple(&self, query: &BuiltQuery) -> Result<Vec<PgRow>, InfrastructureError> {
        self.execute(query).await
    }
}

/// Bind `params` in order, so the Nth value fills `$N`
pub(crate) fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlValue],
) -> Query<'q, Postgres, PgArguments> {
    for value in params {
        query = match value {
            SqlValue::Text(text) => query.bind(text.as_str()),
            SqlValue::Integer(n) => query.bind(*n),
            SqlValue::Float(f) => query.bind(*f),
            SqlValue::Null => query.bind(None::<String>),
        };
    }
    query
}
