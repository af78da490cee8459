//! Tests for the booking service

mod fixtures;
