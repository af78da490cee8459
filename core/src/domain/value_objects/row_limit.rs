//! Maximum number of rows a listing query may return.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::errors::{DomainError, DomainResult};

/// A positive row limit, 10 unless the caller says otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RowLimit(NonZeroU32);

impl RowLimit {
    /// Limit applied when the caller gives none
    pub const DEFAULT: RowLimit = match NonZeroU32::new(10) {
        Some(n) => RowLimit(n),
        None => unreachable!(),
    };

    /// Create a limit, rejecting zero
    pub fn new(limit: u32) -> DomainResult<Self> {
        NonZeroU32::new(limit)
            .map(RowLimit)
            .ok_or_else(|| DomainError::validation("row limit must be a positive integer"))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The limit as it is bound to `LIMIT $N`
    pub fn as_i64(self) -> i64 {
        i64::from(self.0.get())
    }
}

impl Default for RowLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for RowLimit {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RowLimit> for u32 {
    fn from(limit: RowLimit) -> Self {
        limit.get()
    }
}

impl fmt::Display for RowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
