//! The favorites store: the single mutation surface for favorites.
//!
//! Every successful mutation runs, under one lock and in this order:
//! 1. the [`FavoritesState`] update
//! 2. a queued snapshot save for the current scope
//! 3. a state snapshot published to every subscriber
//!
//! Holding the lock across all three makes each `toggle` an atomic
//! read-and-flip, so rapid or duplicated toggles each flip state exactly
//! once, and every subscriber sees snapshots in the order mutations applied.
//!
//! # Loading window
//!
//! Between the start of a load and its completion the store is *loading*.
//! The visible state starts out empty, so `is_favorited` answers `false`
//! for anything not favorited during the window. Mutations apply to that
//! visible state, are published like any other change, and are replayed on
//! top of the loaded state once it arrives. Nothing is saved while loading,
//! so a half-known state can never overwrite a stored snapshot.
//!
//! # Example
//!
//! ```
//! use myfc_favorites::favorites::{FavoriteKind, FavoritesStore};
//! use myfc_favorites::persistence::{MemoryBackend, PersistenceAdapter, ScopeKey};
//! use serde_json::json;
//!
//! let adapter = PersistenceAdapter::new(MemoryBackend::new());
//! let store = FavoritesStore::open(adapter, ScopeKey::Anonymous).unwrap();
//!
//! let record = json!({
//!     "id": "w1",
//!     "title": "Jawline Basics",
//!     "type": "strength",
//!     "duration": 600,
//!     "difficulty": "beginner",
//!     "instructor": "Coach Dana",
//!     "thumbnailUrl": "https://cdn.example.com/w1.jpg",
//!     "videoUrl": "https://cdn.example.com/w1.mp4",
//!     "publishedDate": "2024-01-15"
//! });
//!
//! store.toggle(FavoriteKind::Workout, &record).unwrap();
//! assert!(store.is_favorited(FavoriteKind::Workout, "w1"));
//!
//! store.toggle(FavoriteKind::Workout, &record).unwrap();
//! assert!(!store.is_favorited(FavoriteKind::Workout, "w1"));
//! ```

use serde_json::Value;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::bus::{Subscribers, Subscription};
use super::{normalize, FavoriteEntity, FavoriteKind, FavoritesState};
use crate::error::Result;
use crate::persistence::{PersistStatus, PersistenceAdapter, SaveQueue, ScopeKey, Snapshot};

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    /// Whether the item is favorited after the toggle.
    pub fn is_favorited(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Proof that a load was started for a particular scope generation.
///
/// A ticket whose generation has been superseded (by sign-in, sign-out, or
/// a clear of the loading scope) is rejected by
/// [`FavoritesStore::complete_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    scope: ScopeKey,
    generation: u64,
}

impl LoadTicket {
    /// The scope this load is for.
    pub fn scope(&self) -> &ScopeKey {
        &self.scope
    }
}

/// A mutation applied during the loading window.
#[derive(Debug, Clone)]
enum Pending {
    Add(FavoriteEntity),
    Remove(FavoriteKind, String),
}

#[derive(Debug)]
struct Inner {
    scope: ScopeKey,
    generation: u64,
    loading: bool,
    state: FavoritesState,
    pending: Vec<Pending>,
}

/// Client-session favorites store.
///
/// Owns the session's [`FavoritesState`]; the persistence adapter only ever
/// sees serialized snapshots of it. Construct one per session and hand it to
/// consumers by reference.
#[derive(Debug)]
pub struct FavoritesStore {
    adapter: PersistenceAdapter,
    inner: Mutex<Inner>,
    subscribers: Subscribers,
    writer: SaveQueue,
}

impl FavoritesStore {
    /// Create a store for the anonymous scope, still in its loading window.
    ///
    /// Call [`load`](Self::load), or [`begin_load`](Self::begin_load) and
    /// [`complete_load`](Self::complete_load), to finish startup.
    pub fn new(adapter: PersistenceAdapter) -> Result<Self> {
        let writer = SaveQueue::start(adapter.clone())?;
        Ok(Self {
            adapter,
            inner: Mutex::new(Inner {
                scope: ScopeKey::Anonymous,
                generation: 0,
                loading: true,
                state: FavoritesState::new(),
                pending: Vec::new(),
            }),
            subscribers: Subscribers::default(),
            writer,
        })
    }

    /// Create a store and synchronously load the given scope.
    pub fn open(adapter: PersistenceAdapter, scope: ScopeKey) -> Result<Self> {
        let store = Self::new(adapter)?;
        store.sign_in(scope);
        Ok(store)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // --- Loading ---

    /// Start a load of the current scope.
    ///
    /// The returned ticket supersedes any earlier outstanding ticket. If the
    /// store was not already loading, the visible state is emptied and
    /// published. Queued saves are flushed before returning, so storage can
    /// be read as soon as this returns.
    pub fn begin_load(&self) -> LoadTicket {
        let ticket = {
            let mut inner = self.lock();
            inner.generation += 1;
            if !inner.loading {
                inner.loading = true;
                inner.state.clear();
                inner.pending.clear();
                self.subscribers.publish(&inner.state);
            }
            LoadTicket {
                scope: inner.scope.clone(),
                generation: inner.generation,
            }
        };
        self.writer.flush();
        ticket
    }

    /// Publish a loaded state, unless the ticket has been superseded.
    ///
    /// Mutations made during the loading window are replayed on top of the
    /// loaded state, which is then saved. Returns `false` if the result was
    /// discarded.
    pub fn complete_load(&self, ticket: LoadTicket, loaded: FavoritesState) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation || ticket.scope != inner.scope {
            tracing::debug!(
                "Discarding stale favorites load for scope {} (generation {})",
                ticket.scope,
                ticket.generation
            );
            return false;
        }

        let mut state = loaded;
        let pending = std::mem::take(&mut inner.pending);
        for op in &pending {
            match op {
                Pending::Add(entity) => {
                    state.add(entity.clone());
                }
                Pending::Remove(kind, id) => {
                    state.remove(*kind, id);
                }
            }
        }

        inner.state = state;
        inner.loading = false;
        tracing::debug!(
            "Favorites ready for scope {}: {} items, {} replayed",
            inner.scope,
            inner.state.total(),
            pending.len()
        );

        if !pending.is_empty() {
            self.persist(&inner);
        }
        self.subscribers.publish(&inner.state);
        true
    }

    /// Load the current scope from storage and publish it.
    pub fn load(&self) -> bool {
        let ticket = self.begin_load();
        let loaded = self.adapter.load(ticket.scope());
        self.complete_load(ticket, loaded)
    }

    /// Whether the current scope's load is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    // --- Identity ---

    /// Switch to another scope and start its loading window.
    ///
    /// The visible state is emptied immediately so nothing from the
    /// previous scope remains on screen.
    pub fn switch_scope(&self, scope: ScopeKey) -> LoadTicket {
        let mut inner = self.lock();
        tracing::info!("Switching favorites scope {} -> {}", inner.scope, scope);
        inner.scope = scope;
        inner.generation += 1;
        inner.loading = true;
        inner.state.clear();
        inner.pending.clear();
        self.subscribers.publish(&inner.state);
        LoadTicket {
            scope: inner.scope.clone(),
            generation: inner.generation,
        }
    }

    /// Switch to a scope and load it synchronously.
    pub fn sign_in(&self, scope: ScopeKey) -> bool {
        let ticket = self.switch_scope(scope);
        self.writer.flush();
        let loaded = self.adapter.load(ticket.scope());
        self.complete_load(ticket, loaded)
    }

    /// Clear the current scope's favorites and fall back to the anonymous scope.
    pub fn sign_out(&self) -> bool {
        let scope = self.scope();
        self.clear(&scope);
        self.sign_in(ScopeKey::Anonymous)
    }

    /// Empty a scope and persist the empty state.
    ///
    /// If `scope` is the current scope the visible state is emptied too and
    /// any outstanding load for it is abandoned.
    pub fn clear(&self, scope: &ScopeKey) {
        let mut inner = self.lock();
        tracing::info!("Clearing favorites for scope {}", scope);

        if &inner.scope == scope {
            inner.generation += 1;
            inner.loading = false;
            inner.state.clear();
            inner.pending.clear();
            self.persist(&inner);
            self.subscribers.publish(&inner.state);
        } else {
            match Snapshot::encode(&FavoritesState::new()) {
                Ok(bytes) => self.writer.enqueue(scope.clone(), bytes),
                Err(e) => tracing::warn!("Favorites not persisted: {}", e),
            }
        }
    }

    // --- Queries ---

    /// Check whether an item is favorited.
    ///
    /// While loading this answers `false` unless the item was favorited
    /// during the loading window.
    pub fn is_favorited(&self, kind: FavoriteKind, id: &str) -> bool {
        self.lock().state.contains(kind, id.trim())
    }

    /// Insertion-ordered copy of a kind's favorites.
    pub fn list(&self, kind: FavoriteKind) -> Vec<FavoriteEntity> {
        self.lock().state.list(kind)
    }

    /// Copy of the whole visible state.
    pub fn snapshot(&self) -> FavoritesState {
        self.lock().state.clone()
    }

    /// The current scope.
    pub fn scope(&self) -> ScopeKey {
        self.lock().scope.clone()
    }

    /// The persistence adapter backing this store.
    pub fn adapter(&self) -> &PersistenceAdapter {
        &self.adapter
    }

    /// Subscribe to state snapshots published after each change.
    pub fn subscribe(&self) -> Subscription {
        self.subscribers.subscribe()
    }

    // --- Mutations ---

    /// Flip a raw source record's favorited state.
    ///
    /// The record is normalized first; an invalid record is rejected without
    /// touching state.
    pub fn toggle(&self, kind: FavoriteKind, record: &Value) -> Result<ToggleOutcome> {
        let entity = normalize(kind, record)?;
        self.toggle_entity(entity)
    }

    /// Flip a typed entity's favorited state.
    pub fn toggle_entity(&self, entity: FavoriteEntity) -> Result<ToggleOutcome> {
        let entity = normalize::validate(entity)?;
        let kind = entity.kind();
        let mut inner = self.lock();

        let outcome = if inner.state.contains(kind, entity.id()) {
            let id = entity.id().to_string();
            inner.state.remove(kind, &id);
            self.commit(&mut inner, Pending::Remove(kind, id));
            ToggleOutcome::Removed
        } else {
            inner.state.add(entity.clone());
            self.commit(&mut inner, Pending::Add(entity));
            ToggleOutcome::Added
        };

        tracing::debug!("Toggled {}: {:?}", kind, outcome);
        Ok(outcome)
    }

    /// Favorite a raw source record, replacing any stored copy.
    ///
    /// Returns `true` if the item was not favorited before.
    pub fn add(&self, kind: FavoriteKind, record: &Value) -> Result<bool> {
        let entity = normalize(kind, record)?;
        self.add_entity(entity)
    }

    /// Favorite a typed entity, replacing any stored copy.
    pub fn add_entity(&self, entity: FavoriteEntity) -> Result<bool> {
        let entity = normalize::validate(entity)?;
        let mut inner = self.lock();
        let inserted = inner.state.add(entity.clone());
        self.commit(&mut inner, Pending::Add(entity));
        Ok(inserted)
    }

    /// Unfavorite an item. Returns `false`, and changes nothing, if absent.
    pub fn remove(&self, kind: FavoriteKind, id: &str) -> bool {
        let id = id.trim();
        let mut inner = self.lock();
        if inner.state.remove(kind, id).is_none() {
            return false;
        }
        self.commit(&mut inner, Pending::Remove(kind, id.to_string()));
        true
    }

    /// Steps 2 and 3 of a mutation; the state is already updated.
    fn commit(&self, inner: &mut Inner, op: Pending) {
        if inner.loading {
            inner.pending.push(op);
        } else {
            self.persist(inner);
        }
        self.subscribers.publish(&inner.state);
    }

    fn persist(&self, inner: &Inner) {
        match Snapshot::encode(&inner.state) {
            Ok(bytes) => self.writer.enqueue(inner.scope.clone(), bytes),
            Err(e) => tracing::warn!("Favorites not persisted: {}", e),
        }
    }

    // --- Persistence status ---

    /// Block until every queued save has been attempted.
    pub fn flush(&self) -> PersistStatus {
        self.writer.flush()
    }

    /// Outcome counters for saves attempted so far, without waiting.
    pub fn persist_status(&self) -> PersistStatus {
        self.writer.status()
    }

    /// The most recent save failure, if the last save failed.
    pub fn last_persist_error(&self) -> Option<String> {
        self.writer.status().last_error
    }
}
