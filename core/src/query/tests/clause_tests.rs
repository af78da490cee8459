//! Unit tests for the WHERE/AND composer

use crate::query::{where_or_and, QueryParams};

#[test]
fn test_first_parameter_yields_where() {
    let mut params = QueryParams::new();
    params.push("%van%");
    assert_eq!(where_or_and(&params), "WHERE");
}

#[test]
fn test_later_parameters_yield_and() {
    let mut params = QueryParams::new();
    params.push(50.0);
    params.push(200.0);
    assert_eq!(where_or_and(&params), "AND");

    params.push(3);
    assert_eq!(where_or_and(&params), "AND");
}

#[test]
fn test_empty_list_yields_and() {
    // Called before pushing, the composer cannot know a predicate is coming
    assert_eq!(where_or_and(&QueryParams::new()), "AND");
}
