//! Email address handling shared by lookups and inserts.

/// Trim and lowercase an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
