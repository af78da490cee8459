//! Unit tests for the staged SELECT builder

use crate::domain::value_objects::RowLimit;
use crate::errors::DomainError;
use crate::query::{BuiltQuery, SelectBuilder, SqlValue};

#[test]
fn test_filters_share_numbering_with_params() {
    let mut query = SelectBuilder::new("SELECT * FROM properties");
    query
        .filter("Calgary", |p| format!("city = {}", p))
        .filter(2, |p| format!("parking_spaces >= {}", p));
    assert_eq!(query.params().len(), 2);

    let built = query
        .group_by("properties.id")
        .order_by_with_limit("title", RowLimit::new(3).unwrap());

    assert_eq!(
        built.sql(),
        "SELECT * FROM properties\nWHERE city = $1\nAND parking_spaces >= $2\nGROUP BY properties.id\nORDER BY title\nLIMIT $3"
    );
    assert_eq!(
        built.params(),
        &[
            SqlValue::Text("Calgary".into()),
            SqlValue::Integer(2),
            SqlValue::Integer(3),
        ]
    );
}

#[test]
fn test_multiple_having_predicates_are_joined_with_and() {
    let mut query = SelectBuilder::new("SELECT owner_id, count(*) FROM properties").group_by("owner_id");
    query
        .having(2, |p| format!("count(*) >= {}", p))
        .having(10, |p| format!("count(*) <= {}", p));
    let built = query.order_by_with_limit("owner_id", RowLimit::default());

    assert!(built.sql().contains("HAVING count(*) >= $1\nAND count(*) <= $2"));
    assert!(built.sql().ends_with("LIMIT $3"));
    assert!(built.check_placeholders().is_ok());
}

#[test]
fn test_base_statement_is_trimmed() {
    let built = SelectBuilder::new("\n  SELECT 1 FROM users  \n")
        .group_by("id")
        .order_by_with_limit("id", RowLimit::default());
    assert!(built.sql().starts_with("SELECT 1 FROM users\nGROUP BY id"));
}

#[test]
fn test_check_placeholders_accepts_repeated_references() {
    let query = BuiltQuery::new(
        "SELECT * FROM users WHERE email = $1 OR lower(email) = $1",
        vec![SqlValue::from("a@b.co")],
    );
    assert!(query.check_placeholders().is_ok());
}

#[test]
fn test_check_placeholders_rejects_missing_parameter() {
    let query = BuiltQuery::new(
        "SELECT * FROM users WHERE id = $1 LIMIT $2",
        vec![SqlValue::Integer(1)],
    );
    assert!(matches!(
        query.check_placeholders(),
        Err(DomainError::Internal { .. })
    ));
}

#[test]
fn test_check_placeholders_rejects_gap() {
    let query = BuiltQuery::new(
        "SELECT * FROM users WHERE id = $1 AND name = $3",
        vec![SqlValue::Integer(1), SqlValue::from("x")],
    );
    assert!(query.check_placeholders().is_err());
    assert_eq!(query.placeholder_indices().into_iter().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_check_placeholders_rejects_unused_parameter() {
    let query = BuiltQuery::new("SELECT * FROM users", vec![SqlValue::Null]);
    assert!(query.check_placeholders().is_err());
}

#[test]
fn test_into_parts() {
    let (sql, params) = BuiltQuery::new("SELECT $1", vec![SqlValue::Float(4.5)]).into_parts();
    assert_eq!(sql, "SELECT $1");
    assert_eq!(params, vec![SqlValue::Float(4.5)]);
}
