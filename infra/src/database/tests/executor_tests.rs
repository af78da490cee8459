//! Executor tests that never reach a server: the placeholder check runs
//! before any connection is acquired.

use lb_core::query::{BuiltQuery, SqlValue};

use crate::config::DatabaseConfig;
use crate::database::connection::DatabasePool;
use crate::InfrastructureError;

fn unreachable_executor() -> crate::database::QueryExecutor {
    let config = DatabaseConfig::new("postgres://nobody@127.0.0.1:1/lightbnb").with_connect_timeout(1);
    DatabasePool::new_lazy(config).unwrap().executor()
}

#[tokio::test]
async fn test_missing_parameter_is_rejected_before_execution() {
    let executor = unreachable_executor();
    let query = BuiltQuery::new(
        "SELECT * FROM users WHERE id = $1 LIMIT $2",
        vec![SqlValue::Integer(1)],
    );

    let result = executor.execute(&query).await;
    match result {
        Err(InfrastructureError::Query(message)) => assert!(message.contains("placeholder mismatch")),
        other => panic!("expected a query error, got {:?}", other.map(|rows| rows.len())),
    }
}

#[tokio::test]
async fn test_unused_parameter_is_rejected_before_execution() {
    let executor = unreachable_executor();
    let query = BuiltQuery::new(
        "SELECT * FROM users WHERE email = $1",
        vec![SqlValue::from("a@b.c"), SqlValue::from("extra")],
    );

    assert!(matches!(
        executor.fetch_single(&query).await,
        Err(InfrastructureError::Query(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_surfaces_database_error() {
    let executor = unreachable_executor();
    let query = BuiltQuery::new("SELECT 1", vec![]);

    assert!(matches!(
        executor.fetch_multiple(&query).await,
        Err(InfrastructureError::Database(_))
    ));
}
