//! Named entity model

use serde::{Deserialize, Serialize};

/// A named-entity mention recognized by the external pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Mention text
    pub text: String,
    /// Entity type (e.g., "PERSON", "ORGANIZATION")
    pub label: String,
}

impl NamedEntity {
    /// Create a named entity
    #[must_use]
    pub fn new(text: &str, label: &str) -> Self {
        Self {
            text: text.to_string(),
            label: label.to_string(),
        }
    }
}
