//! In-memory snapshot store.

use std::collections::HashMap;

use super::traits::SnapshotStore;
use crate::domain::GoalResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot, e.g. a snapshot left by a previous run.
    pub fn with_slot(key: &str, snapshot: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), snapshot.to_string());
        Self { slots }
    }

    /// Current content of a slot.
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> GoalResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, snapshot: &str) -> GoalResult<()> {
        self.slots.insert(key.to_string(), snapshot.to_string());
        Ok(())
    }
}
