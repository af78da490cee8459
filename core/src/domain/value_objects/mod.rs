//! Value objects describing search requests.

pub mod row_limit;
pub mod search_filter;

pub use row_limit::RowLimit;
pub use search_filter::PropertySearchFilter;
