//! MYFC favorites - an offline-tolerant favorites store for workouts and
//! movements.
//!
//! Users favorite items from the MYFC catalog; the favorited set is kept in
//! memory, saved as a versioned snapshot per user scope, restored on start,
//! and pushed to every subscriber after each change.
//!
//! # Modules
//!
//! - [`favorites`] - Entities, normalization, the favorites set and the store
//! - [`persistence`] - Scopes, snapshot envelope, storage backends and the write queue
//! - [`config`] - Configuration file loading and environment overrides
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use myfc_favorites::favorites::{FavoriteKind, FavoritesStore};
//! use myfc_favorites::persistence::{MemoryBackend, PersistenceAdapter, ScopeKey};
//! use serde_json::json;
//!
//! let adapter = PersistenceAdapter::new(MemoryBackend::new());
//! let store = FavoritesStore::open(adapter, ScopeKey::user("alice").unwrap()).unwrap();
//! let updates = store.subscribe();
//!
//! let record = json!({
//!     "id": "m1",
//!     "title": "Chin Tuck",
//!     "category": "posture",
//!     "instructor": "Coach Sam",
//!     "thumbnailUrl": "https://cdn.example.com/m1.jpg",
//!     "videoUrl": "https://cdn.example.com/m1.mp4",
//!     "dateAdded": "2024-02-01"
//! });
//! store.toggle(FavoriteKind::Movement, &record).unwrap();
//!
//! let latest = updates.latest().unwrap();
//! assert!(latest.contains(FavoriteKind::Movement, "m1"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
pub mod persistence;
pub mod ui;

pub use error::{FavoritesError, Result};
