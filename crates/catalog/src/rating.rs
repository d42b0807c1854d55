//! Product rating value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// A customer rating: a 1..=5 score with a comment.
///
/// Compared by value; construction enforces the score range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    value: u8,
    comment: String,
    rated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(value: u8, comment: impl Into<String>, rated_at: DateTime<Utc>) -> DomainResult<Self> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::validation("rating value must be between 1 and 5"));
        }
        Ok(Self {
            value,
            comment: comment.into(),
            rated_at,
        })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rated_at(&self) -> DateTime<Utc> {
        self.rated_at
    }
}
