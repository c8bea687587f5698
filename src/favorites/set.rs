//! In-memory favorites set.
//!
//! [`FavoritesState`] keeps one partition per [`FavoriteKind`]. Each
//! partition offers O(1) membership by id and remembers insertion order so
//! listings stay stable between renders.

use std::collections::HashMap;

use super::{FavoriteEntity, FavoriteKind, MovementFavorite, WorkoutFavorite};

/// Insertion-ordered map from id to entity.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partition<T> {
    order: Vec<String>,
    items: HashMap<String, T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }
}

impl<T: Clone> Partition<T> {
    fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Insert or replace. Replacing keeps the original position.
    fn upsert(&mut self, id: String, item: T) -> bool {
        if self.items.insert(id.clone(), item).is_some() {
            false
        } else {
            self.order.push(id);
            true
        }
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.items.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.order.clear();
        self.items.clear();
    }
}

/// The favorited workouts and movements of one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    workouts: Partition<WorkoutFavorite>,
    movements: Partition<MovementFavorite>,
}

impl FavoritesState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an id is favorited within a kind.
    pub fn contains(&self, kind: FavoriteKind, id: &str) -> bool {
        match kind {
            FavoriteKind::Workout => self.workouts.contains(id),
            FavoriteKind::Movement => self.movements.contains(id),
        }
    }

    /// Insert or replace an entity in its kind's partition.
    ///
    /// Returns `true` if the id was not present before. Replacing an existing
    /// id overwrites its stored fields (last write wins) without duplicating
    /// it or moving it in the listing.
    pub fn add(&mut self, entity: FavoriteEntity) -> bool {
        match entity {
            FavoriteEntity::Workout(w) => self.workouts.upsert(w.id.clone(), w),
            FavoriteEntity::Movement(m) => self.movements.upsert(m.id.clone(), m),
        }
    }

    /// Remove an id from a kind's partition. Absent ids are a no-op.
    pub fn remove(&mut self, kind: FavoriteKind, id: &str) -> Option<FavoriteEntity> {
        match kind {
            FavoriteKind::Workout => self.workouts.remove(id).map(FavoriteEntity::Workout),
            FavoriteKind::Movement => self.movements.remove(id).map(FavoriteEntity::Movement),
        }
    }

    /// Look up a single favorite.
    pub fn get(&self, kind: FavoriteKind, id: &str) -> Option<FavoriteEntity> {
        match kind {
            FavoriteKind::Workout => self.workouts.items.get(id).cloned().map(FavoriteEntity::Workout),
            FavoriteKind::Movement => self
                .movements
                .items
                .get(id)
                .cloned()
                .map(FavoriteEntity::Movement),
        }
    }

    /// Insertion-ordered copy of a kind's favorites.
    pub fn list(&self, kind: FavoriteKind) -> Vec<FavoriteEntity> {
        match kind {
            FavoriteKind::Workout => self
                .workouts
                .values()
                .cloned()
                .map(FavoriteEntity::Workout)
                .collect(),
            FavoriteKind::Movement => self
                .movements
                .values()
                .cloned()
                .map(FavoriteEntity::Movement)
                .collect(),
        }
    }

    /// Insertion-ordered copy of the favorited workouts.
    pub fn workouts(&self) -> Vec<WorkoutFavorite> {
        self.workouts.values().cloned().collect()
    }

    /// Insertion-ordered copy of the favorited movements.
    pub fn movements(&self) -> Vec<MovementFavorite> {
        self.movements.values().cloned().collect()
    }

    /// Number of favorites of one kind.
    pub fn len(&self, kind: FavoriteKind) -> usize {
        match kind {
            FavoriteKind::Workout => self.workouts.len(),
            FavoriteKind::Movement => self.movements.len(),
        }
    }

    /// Number of favorites across both kinds.
    pub fn total(&self) -> usize {
        self.workouts.len() + self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Drop every favorite of both kinds.
    pub fn clear(&mut self) {
        self.workouts.clear();
        self.movements.clear();
    }
}
