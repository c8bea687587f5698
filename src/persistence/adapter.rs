//! Load/save/clear contract over a snapshot backend.

use std::sync::Arc;

use super::{ScopeKey, Snapshot, SnapshotBackend};
use crate::error::{FavoritesError, Result};
use crate::favorites::FavoritesState;

/// Reads and writes whole-state snapshots for a scope.
///
/// The adapter holds no copy of any state; it only encodes and decodes.
#[derive(Clone)]
pub struct PersistenceAdapter {
    backend: Arc<dyn SnapshotBackend>,
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("backend", &self.backend.describe())
            .finish()
    }
}

impl PersistenceAdapter {
    /// Create an adapter over a backend.
    pub fn new(backend: impl SnapshotBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create an adapter over an already shared backend.
    pub fn from_shared(backend: Arc<dyn SnapshotBackend>) -> Self {
        Self { backend }
    }

    /// Load the state for a scope, failing soft.
    ///
    /// Missing, corrupt, or incompatible snapshots all yield an empty state.
    /// Corrupt data is discarded, not repaired.
    pub fn load(&self, scope: &ScopeKey) -> FavoritesState {
        match self.try_load(scope) {
            Ok(Some(state)) => {
                tracing::debug!(
                    "Loaded {} favorites for scope {}",
                    state.total(),
                    scope
                );
                state
            }
            Ok(None) => {
                tracing::debug!("No stored favorites for scope {}", scope);
                FavoritesState::new()
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable favorites: {}", e);
                FavoritesState::new()
            }
        }
    }

    /// Load the state for a scope, surfacing read failures.
    ///
    /// Returns `Ok(None)` when nothing is stored for the scope.
    pub fn try_load(&self, scope: &ScopeKey) -> Result<Option<FavoritesState>> {
        let bytes = self
            .backend
            .read(scope)
            .map_err(|e| FavoritesError::PersistenceRead {
                scope: scope.to_string(),
                message: format!("{:#}", e),
            })?;

        match bytes {
            Some(bytes) => Snapshot::decode(scope, &bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Overwrite the stored snapshot for a scope.
    pub fn save(&self, scope: &ScopeKey, state: &FavoritesState) -> Result<()> {
        let bytes = Snapshot::encode(state)?;
        self.save_encoded(scope, &bytes)
    }

    /// Overwrite the stored snapshot for a scope with pre-encoded bytes.
    pub fn save_encoded(&self, scope: &ScopeKey, bytes: &[u8]) -> Result<()> {
        self.backend
            .write(scope, bytes)
            .map_err(|e| FavoritesError::PersistenceWrite {
                scope: scope.to_string(),
                message: format!("{:#}", e),
            })?;
        tracing::debug!("Saved {} bytes of favorites for scope {}", bytes.len(), scope);
        Ok(())
    }

    /// Persist an empty state for a scope.
    pub fn clear(&self, scope: &ScopeKey) -> Result<()> {
        self.save(scope, &FavoritesState::new())
    }

    /// Short label of the underlying backend.
    pub fn describe(&self) -> String {
        self.backend.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::entity::fixtures::{movement, workout};
    use crate::favorites::FavoriteKind;
    use crate::persistence::{FileBackend, MemoryBackend};
    use tempfile::TempDir;

    struct BrokenBackend;

    impl SnapshotBackend for BrokenBackend {
        fn read(&self, _scope: &ScopeKey) -> anyhow::Result<Option<Vec<u8>>> {
            anyhow::bail!("device unavailable")
        }

        fn write(&self, _scope: &ScopeKey, _bytes: &[u8]) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let adapter = PersistenceAdapter::new(FileBackend::new(temp.path()));
        let scope = ScopeKey::user("alice").unwrap();

        let mut state = FavoritesState::new();
        state.add(workout("w1", "Jawline Basics").into());
        state.add(movement("m1", "Chin Tuck").into());
        adapter.save(&scope, &state).unwrap();

        let loaded = adapter.load(&scope);
        assert!(loaded.contains(FavoriteKind::Workout, "w1"));
        assert!(loaded.contains(FavoriteKind::Movement, "m1"));
        assert!(!loaded.contains(FavoriteKind::Movement, "w1"));
    }

    #[test]
    fn load_missing_returns_empty() {
        let adapter = PersistenceAdapter::new(MemoryBackend::new());
        assert!(adapter.load(&ScopeKey::Anonymous).is_empty());
        assert!(adapter.try_load(&ScopeKey::Anonymous).unwrap().is_none());
    }

    #[test]
    fn load_corrupt_returns_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.insert_raw(&ScopeKey::Anonymous, b"\x00\x01garbage".to_vec());
        let adapter = PersistenceAdapter::from_shared(backend);

        assert!(adapter.load(&ScopeKey::Anonymous).is_empty());
        assert!(adapter.try_load(&ScopeKey::Anonymous).is_err());
    }

    #[test]
    fn load_read_failure_returns_empty() {
        let adapter = PersistenceAdapter::new(BrokenBackend);
        assert!(adapter.load(&ScopeKey::Anonymous).is_empty());
    }

    #[test]
    fn save_failure_is_write_error() {
        let adapter = PersistenceAdapter::new(BrokenBackend);
        let err = adapter
            .save(&ScopeKey::Anonymous, &FavoritesState::new())
            .unwrap_err();
        assert!(matches!(err, FavoritesError::PersistenceWrite { .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn clear_persists_empty_state() {
        let adapter = PersistenceAdapter::new(MemoryBackend::new());
        let scope = ScopeKey::user("alice").unwrap();
        let mut state = FavoritesState::new();
        state.add(workout("w1", "Jawline Basics").into());
        adapter.save(&scope, &state).unwrap();

        adapter.clear(&scope).unwrap();

        let loaded = adapter.try_load(&scope).unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn scopes_are_isolated() {
        let adapter = PersistenceAdapter::new(MemoryBackend::new());
        let alice = ScopeKey::user("alice").unwrap();
        let mut state = FavoritesState::new();
        state.add(workout("w1", "Jawline Basics").into());
        adapter.save(&alice, &state).unwrap();

        assert!(adapter.load(&ScopeKey::user("bob").unwrap()).is_empty());
    }
}
