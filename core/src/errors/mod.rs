//! Domain error types and error handling.

use thiserror::Error;
use validator::ValidationErrors;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// The statement was rejected or the store could not be reached
    #[error("Query failed: {message}")]
    Query { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        DomainError::Query {
            message: message.into(),
        }
    }
}

/// Flattens field errors into `field: message` pairs, sorted by field and
/// joined with `; `. The rule code stands in for a missing message.
impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    let message = error.message.as_ref().unwrap_or(&error.code);
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();

        DomainError::Validation {
            message: messages.join("; "),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
