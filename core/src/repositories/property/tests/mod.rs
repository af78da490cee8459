//! Tests for the property repository

mod mock_tests;
