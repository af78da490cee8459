//! Parameterized SQL construction.
//!
//! Statements are assembled append-only, and the SQL text and its positional
//! parameter list always travel together: the Nth value pushed is placeholder
//! `$N`. Filter values never appear in the SQL text.

pub mod builder;
pub mod clause;
pub mod params;
pub mod property_search;
pub mod results;

pub use builder::{BuiltQuery, Filtering, Grouped, SelectBuilder};
pub use clause::where_or_and;
pub use params::{Placeholder, QueryParams, SqlValue};
pub use property_search::{build_property_search, PROPERTY_SEARCH_BASE};
pub use results::{collapse_multiple, collapse_single, first_row, non_empty};

#[cfg(test)]
mod tests;
