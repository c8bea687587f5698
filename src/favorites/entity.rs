//! Stored favorite entities.
//!
//! Workouts and movements share most of their shape but live in separate
//! namespaces. [`FavoriteEntity`] is the tagged union the store works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FavoriteKind;

/// Workout difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("unknown difficulty: {}", s)),
        }
    }
}

/// A favorited workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutFavorite {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Workout type (e.g. "strength", "mobility").
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Length in seconds.
    pub duration: u64,
    pub difficulty: Difficulty,
    /// Required equipment, in display order.
    pub equipment: Vec<String>,
    pub instructor: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub published_date: DateTime<Utc>,
    pub views: u64,
    pub likes: u64,
}

/// A favorited movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementFavorite {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub equipment: Vec<String>,
    pub instructor: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub date_added: DateTime<Utc>,
    pub views: u64,
    pub likes: u64,
}

/// A normalized favorite of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FavoriteEntity {
    Workout(WorkoutFavorite),
    Movement(MovementFavorite),
}

impl FavoriteEntity {
    /// The namespace this entity belongs to.
    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Workout(_) => FavoriteKind::Workout,
            Self::Movement(_) => FavoriteKind::Movement,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Workout(w) => &w.id,
            Self::Movement(m) => &m.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Workout(w) => &w.title,
            Self::Movement(m) => &m.title,
        }
    }

    pub fn instructor(&self) -> &str {
        match self {
            Self::Workout(w) => &w.instructor,
            Self::Movement(m) => &m.instructor,
        }
    }

    pub fn as_workout(&self) -> Option<&WorkoutFavorite> {
        match self {
            Self::Workout(w) => Some(w),
            Self::Movement(_) => None,
        }
    }

    pub fn as_movement(&self) -> Option<&MovementFavorite> {
        match self {
            Self::Movement(m) => Some(m),
            Self::Workout(_) => None,
        }
    }
}

impl From<WorkoutFavorite> for FavoriteEntity {
    fn from(workout: WorkoutFavorite) -> Self {
        Self::Workout(workout)
    }
}

impl From<MovementFavorite> for FavoriteEntity {
    fn from(movement: MovementFavorite) -> Self {
        Self::Movement(movement)
    }
}
