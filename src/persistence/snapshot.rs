//! Versioned snapshot envelope.
//!
//! A snapshot is the complete serialized form of a [`FavoritesState`]:
//!
//! ```json
//! { "version": 1, "workouts": [...], "movements": [...] }
//! ```
//!
//! Decoding is strict. Any version other than [`Snapshot::CURRENT_VERSION`]
//! is unreadable rather than guessed at, and a snapshot containing an
//! invalid entry is rejected as a whole.

use serde::{Deserialize, Serialize};

use super::ScopeKey;
use crate::error::{FavoritesError, Result};
use crate::favorites::{normalize, FavoriteEntity, FavoritesState, MovementFavorite, WorkoutFavorite};

/// Serialized favorites for one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version.
    pub version: u32,
    pub workouts: Vec<WorkoutFavorite>,
    pub movements: Vec<MovementFavorite>,
}

/// Just enough of the envelope to check the version before a full parse.
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl Snapshot {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture a state, preserving listing order.
    pub fn from_state(state: &FavoritesState) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            workouts: state.workouts(),
            movements: state.movements(),
        }
    }

    /// Rebuild a state from this snapshot.
    ///
    /// Duplicate ids collapse to the last occurrence.
    pub fn into_state(self, scope: &ScopeKey) -> Result<FavoritesState> {
        let mut state = FavoritesState::new();
        let entities = self
            .workouts
            .into_iter()
            .map(FavoriteEntity::Workout)
            .chain(self.movements.into_iter().map(FavoriteEntity::Movement));

        for entity in entities {
            let entity = normalize::validate(entity).map_err(|e| read_error(scope, e))?;
            state.add(entity);
        }
        Ok(state)
    }

    /// Serialize a state to snapshot bytes.
    pub fn encode(state: &FavoritesState) -> Result<Vec<u8>> {
        serde_json::to_vec(&Self::from_state(state)).map_err(|e| {
            FavoritesError::Other(anyhow::anyhow!("Failed to serialize favorites: {}", e))
        })
    }

    /// Parse snapshot bytes for the given scope.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::PersistenceRead`] for malformed bytes,
    /// unsupported versions, or invalid entries.
    pub fn decode(scope: &ScopeKey, bytes: &[u8]) -> Result<FavoritesState> {
        let probe: VersionProbe =
            serde_json::from_slice(bytes).map_err(|e| read_error(scope, e))?;
        if probe.version != Self::CURRENT_VERSION {
            return Err(read_error(
                scope,
                format!(
                    "unsupported snapshot version {} (expected {})",
                    probe.version,
                    Self::CURRENT_VERSION
                ),
            ));
        }

        let snapshot: Self = serde_json::from_slice(bytes).map_err(|e| read_error(scope, e))?;
        snapshot.into_state(scope)
    }
}

fn read_error(scope: &ScopeKey, cause: impl std::fmt::Display) -> FavoritesError {
    FavoritesError::PersistenceRead {
        scope: scope.to_string(),
        message: cause.to_string(),
    }
}
