//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Rating, comparison and catalog storage (in-memory, YAML snapshot)

pub mod storage;

pub use storage::{FileSnapshotStore, InMemoryTlxStore, TlxSnapshot};
