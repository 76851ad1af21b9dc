//! Goal List Core
//!
//! Layered architecture:
//! - domain: Goal entity, ordered list and errors
//! - reorder: drop geometry for drag-and-drop
//! - snapshot: JSON snapshot encoding and import parsing
//! - repository: storage backends for the snapshot slot
//! - board: command dispatch tying the list to its storage

pub mod board;
pub mod config;
pub mod domain;
pub mod reorder;
pub mod repository;
pub mod snapshot;

mod tests;

pub use board::{load, Command, GoalBoard};
pub use config::BoardConfig;
pub use domain::{Goal, GoalError, GoalList, GoalResult};
pub use reorder::{drop_position, insertion_index, RowSpan};
pub use repository::{MemoryStore, SnapshotStore};
pub use snapshot::ExportFile;
