//! Tests for query construction

mod builder_tests;
mod clause_tests;
mod results_tests;
