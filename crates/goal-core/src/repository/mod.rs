//! Repository Layer
//!
//! Storage backends for the snapshot slot.
//! - traits: the abstract slot interface
//! - memory: in-process backend for tests and native callers

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::SnapshotStore;
