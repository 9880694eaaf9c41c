//! The movie catalog record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry. Immutable after creation; the catalog exposes no update
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Opaque unique identifier, generated at creation.
    pub id: String,
    /// Display title.
    pub title: String,
}

impl Movie {
    /// Creates a movie with a freshly generated identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
        }
    }
}
