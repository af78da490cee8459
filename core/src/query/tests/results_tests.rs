//! Unit tests for result shaping

use crate::errors::DomainError;
use crate::query::{collapse_multiple, collapse_single, first_row, non_empty};

#[test]
fn test_first_row() {
    assert_eq!(first_row(vec![3, 1, 2]), Some(3));
    assert_eq!(first_row(Vec::<i32>::new()), None);
}

#[test]
fn test_non_empty() {
    assert_eq!(non_empty(vec!["a", "b"]), Some(vec!["a", "b"]));
    assert_eq!(non_empty(Vec::<&str>::new()), None);
}

#[test]
fn test_collapse_single() {
    assert_eq!(collapse_single::<_, DomainError>("lookup", Ok(Some(7))), Some(7));
    assert_eq!(collapse_single::<i32, DomainError>("lookup", Ok(None)), None);
    assert_eq!(
        collapse_single::<i32, _>("lookup", Err(DomainError::query("connection refused"))),
        None
    );
}

#[test]
fn test_collapse_multiple_conflates_empty_and_failure() {
    let empty = collapse_multiple::<i32, DomainError>("search", Ok(vec![]));
    let failed = collapse_multiple::<i32, _>("search", Err(DomainError::query("timeout")));
    assert_eq!(empty, failed);
    assert_eq!(
        collapse_multiple::<_, DomainError>("search", Ok(vec![1, 2])),
        Some(vec![1, 2])
    );
}
