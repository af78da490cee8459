//! Keyword selection for dynamically added predicates.

use super::params::QueryParams;

/// Keyword that introduces the predicate whose parameter was just pushed.
///
/// Must be called after pushing that predicate's value: a list holding exactly
/// one parameter means this is the first predicate (`WHERE`), anything longer
/// means one already precedes it (`AND`).
pub fn where_or_and(params: &QueryParams) -> &'static str {
    if params.len() == 1 {
        "WHERE"
    } else {
        "AND"
    }
}
