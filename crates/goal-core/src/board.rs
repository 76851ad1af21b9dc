//! Goal Board
//!
//! Owns the goal list, its storage backend and configuration. Every user
//! action arrives as a `Command`; when a command changes the list the whole
//! snapshot is written back to storage before `apply` returns.

use crate::config::BoardConfig;
use crate::domain::{GoalList, GoalResult};
use crate::repository::SnapshotStore;
use crate::snapshot::{self, ExportFile};

/// A discrete user action against the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append raw input text (trimmed, blank ignored)
    Append(String),
    /// Remove the goal at an index
    Remove(usize),
    /// Move a goal; `to` is a position among the other goals
    Move { from: usize, to: usize },
    /// Replace every goal with the contents of an imported file
    Import(String),
}

#[derive(Debug, Clone)]
pub struct GoalBoard<S> {
    list: GoalList,
    store: S,
    config: BoardConfig,
}

impl<S: SnapshotStore> GoalBoard<S> {
    /// Open a board, seeding the list from the configured storage slot.
    pub fn open(store: S, config: BoardConfig) -> Self {
        let list = load(&store, &config.storage_key);
        Self {
            list,
            store,
            config,
        }
    }

    pub fn goals(&self) -> &GoalList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a command and persist if the list changed.
    ///
    /// Only `Import` can fail; on failure neither the list nor storage is
    /// touched.
    pub fn apply(&mut self, command: Command) -> GoalResult<()> {
        log::debug!("[BOARD] Applying {:?}", command);
        let changed = match command {
            Command::Append(text) => self.list.append(&text),
            Command::Remove(index) => {
                let removed = self.list.remove_at(index);
                if removed.is_none() {
                    log::warn!("[BOARD] Remove ignored, no goal at index {}", index);
                }
                removed.is_some()
            }
            Command::Move { from, to } => {
                let moved = self.list.move_to(from, to);
                if !moved {
                    log::warn!("[BOARD] Move ignored, no goal at index {}", from);
                }
                moved
            }
            Command::Import(contents) => {
                let goals = match snapshot::decode(&contents) {
                    Ok(goals) => goals,
                    Err(e) => {
                        log::warn!("[BOARD] Import rejected: {:?}", e);
                        return Err(e);
                    }
                };
                log::info!("[BOARD] Imported {} goals", goals.len());
                self.list.replace_all(goals);
                true
            }
        };

        if changed {
            self.save();
        }
        Ok(())
    }

    /// Overwrite the storage slot with the current list.
    ///
    /// Failures are logged; the in-memory list stays authoritative.
    pub fn save(&mut self) {
        let result = snapshot::encode(&self.list)
            .and_then(|json| self.store.write(&self.config.storage_key, &json));
        match result {
            Ok(()) => log::debug!("[BOARD] Saved {} goals", self.list.len()),
            Err(e) => log::error!("[BOARD] Failed to save goals: {}", e),
        }
    }

    /// Export the current list as a downloadable file.
    pub fn export(&self) -> GoalResult<ExportFile> {
        snapshot::export_file(&self.list, &self.config)
    }
}

/// Read the list stored under `key`.
///
/// A missing, unreadable or malformed slot yields an empty list; that is the
/// normal state on first run.
pub fn load<S: SnapshotStore>(store: &S, key: &str) -> GoalList {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("No saved goals found, starting fresh");
            return GoalList::new();
        }
        Err(e) => {
            log::warn!("Failed to read saved goals: {}", e);
            return GoalList::new();
        }
    };

    match snapshot::decode(&raw) {
        Ok(goals) => {
            log::info!("Loaded {} goals", goals.len());
            GoalList::from_goals(goals)
        }
        Err(e) => {
            log::warn!("Discarding unreadable saved goals: {:?}", e);
            GoalList::new()
        }
    }
}
