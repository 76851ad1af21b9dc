//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for snapshot storage.
//! Implementations can use browser localStorage, memory, etc.

use crate::domain::GoalResult;

/// String-keyed storage holding whole snapshots.
///
/// Writes overwrite the slot entirely; there is no merge.
pub trait SnapshotStore {
    /// Read the slot. `Ok(None)` means nothing has been saved yet.
    fn read(&self, key: &str) -> GoalResult<Option<String>>;

    /// Overwrite the slot with `snapshot`.
    fn write(&mut self, key: &str, snapshot: &str) -> GoalResult<()>;
}
