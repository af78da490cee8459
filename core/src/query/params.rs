//! Positional parameters and placeholders.

use serde::Serialize;
use std::fmt;

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Untyped SQL NULL, bound as nullable text
    Null,
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_owned())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Integer(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<Option<String>> for SqlValue {
    /// `None` binds as text NULL
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => SqlValue::Text(text),
            None => SqlValue::Null,
        }
    }
}

/// 1-based placeholder index, rendered as `$N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placeholder(usize);

impl Placeholder {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Ordered parameter list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    values: Vec<SqlValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and return the placeholder that now refers to it
    pub fn push(&mut self, value: impl Into<SqlValue>) -> Placeholder {
        self.values.push(value.into());
        Placeholder(self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<SqlValue> {
        self.values
    }
}

impl From<Vec<SqlValue>> for QueryParams {
    fn from(values: Vec<SqlValue>) -> Self {
        Self { values }
    }
}
