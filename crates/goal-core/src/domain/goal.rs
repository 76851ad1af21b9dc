//! Goal Entity
//!
//! A single list entry. Goals have no identity beyond their text and their
//! position in the owning list; duplicates are allowed.

use serde::Serialize;

/// A non-empty, trimmed line of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Goal {
    text: String,
}

impl Goal {
    /// Build a goal from raw input. Surrounding whitespace is trimmed;
    /// returns `None` when nothing is left.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
        })
    }

    /// Build a goal from stored or imported text, kept exactly as given.
    /// Returns `None` for blank text.
    pub fn from_snapshot(text: String) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
