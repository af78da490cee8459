//! Tests for the user repository
