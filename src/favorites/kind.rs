//! Favorite namespaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FavoritesError;

/// Discriminator for the two independent favorite namespaces.
///
/// Ids are only unique within a kind; every lookup is kind-qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Workout,
    Movement,
}

impl FavoriteKind {
    /// All kinds, in listing order.
    pub const ALL: [FavoriteKind; 2] = [FavoriteKind::Workout, FavoriteKind::Movement];

    /// The lowercase discriminator string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Movement => "movement",
        }
    }

    /// Plural label used in listings.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Workout => "workouts",
            Self::Movement => "movements",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteKind {
    type Err = FavoritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "workout" | "workouts" => Ok(Self::Workout),
            "movement" | "movements" => Ok(Self::Movement),
            _ => Err(FavoritesError::UnknownKind {
                value: s.to_string(),
            }),
        }
    }
}
