//! Tests for the reservation repository

mod mock_tests;
