//! Domain errors for goal list operations.

use thiserror::Error;

/// Common result type for goal operations
pub type GoalResult<T> = Result<T, GoalError>;

/// Errors raised while importing, encoding or persisting goals.
///
/// `Parse` and `InvalidFormat` are shown to the user verbatim, so their
/// messages are complete sentences.
#[derive(Debug, Error)]
pub enum GoalError {
    /// Content could not be parsed as JSON at all.
    #[error("Error parsing JSON file. Please upload a valid goals JSON file.")]
    Parse(#[source] serde_json::Error),

    /// Content is valid JSON but not an array of strings.
    #[error("Invalid JSON file. Please upload a valid goals JSON file.")]
    InvalidFormat { found: String },

    /// A storage backend failed to read or write the snapshot slot.
    #[error("storage error: {0}")]
    Storage(String),

    /// Snapshot could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GoalError {
    /// Whether this error came from user-supplied content (and should be
    /// reported to the user) rather than from the environment.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, GoalError::Parse(_) | GoalError::InvalidFormat { .. })
    }
}
