//! Durable storage for favorites.
//!
//! Favorites are persisted as whole-state snapshots, one per [`ScopeKey`]:
//! - [`scope`] - scope keys and their storage names
//! - [`snapshot`] - the versioned envelope format
//! - [`backend`] - key-value byte stores (file and memory)
//! - [`adapter`] - fail-soft load, overwrite save, clear
//! - [`writer`] - ordered background save queue

pub mod adapter;
pub mod backend;
pub mod scope;
pub mod snapshot;
pub mod writer;

pub use adapter::PersistenceAdapter;
pub use backend::{FileBackend, MemoryBackend, SnapshotBackend};
pub use scope::ScopeKey;
pub use snapshot::Snapshot;
pub use writer::{PersistStatus, SaveQueue};
