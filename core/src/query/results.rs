//! Result shaping on top of the executor.
//!
//! `first_row` and `non_empty` are the two conventions callers of the booking
//! store rely on. The `collapse_*` helpers reproduce the legacy contract where
//! a failed query and an empty result are both reported as `None`.

use std::fmt::Display;

/// First row, or `None` when nothing matched
pub fn first_row<T>(rows: Vec<T>) -> Option<T> {
    rows.into_iter().next()
}

/// All rows, or `None` when nothing matched
pub fn non_empty<T>(rows: Vec<T>) -> Option<Vec<T>> {
    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}

/// Log a failed single-row lookup and fold it into `None`
pub fn collapse_single<T, E: Display>(operation: &str, result: Result<Option<T>, E>) -> Option<T> {
    match result {
        Ok(row) => row,
        Err(err) => {
            tracing::error!(operation, error = %err, "query failed");
            None
        }
    }
}

/// Log a failed listing and fold both failure and an empty result into `None`
pub fn collapse_multiple<T, E: Display>(operation: &str, result: Result<Vec<T>, E>) -> Option<Vec<T>> {
    match result {
        Ok(rows) => non_empty(rows),
        Err(err) => {
            tracing::error!(operation, error = %err, "query failed");
            None
        }
    }
}
