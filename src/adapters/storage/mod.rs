//! Storage Adapters
//!
//! Implementations of the rating, comparison and catalog ports.
//!
//! ## Available Adapters
//!
//! - **FileSnapshotStore** - Stores every record in one YAML snapshot file
//! - **InMemoryTlxStore** - Stores records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSnapshotStore, InMemoryTlxStore};
//!
//! // Production: snapshot file
//! let store = FileSnapshotStore::open("./data/catlx.yaml").await?;
//!
//! // Testing: in-memory store
//! let store = InMemoryTlxStore::new().with_mte(mte);
//! ```

mod file_snapshot_store;
mod in_memory_tlx_store;
mod snapshot;

pub use file_snapshot_store::FileSnapshotStore;
pub use in_memory_tlx_store::InMemoryTlxStore;
pub use snapshot::TlxSnapshot;
