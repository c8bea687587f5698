//! Persistence scopes.
//!
//! Favorites are partitioned by signed-in identity so that one person's
//! favorites never show up for the next person using the same device.
//! Unauthenticated use maps to a single anonymous/local scope.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::{FavoritesError, Result};

/// Identifier for one partition of persisted favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Not signed in.
    #[default]
    Anonymous,
    /// Signed in as the given user id.
    User(String),
}

impl ScopeKey {
    /// Scope for a signed-in user.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the user id is blank.
    pub fn user(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(FavoritesError::validation("scope", "user", "must not be empty"));
        }
        Ok(Self::User(id.to_string()))
    }

    /// Scope for an optional user id; `None` or blank means anonymous.
    pub fn from_user(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::User(id.to_string()),
            _ => Self::Anonymous,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// The user id, if signed in.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::User(id) => Some(id),
            Self::Anonymous => None,
        }
    }

    /// Stable, filesystem-safe name for this scope's snapshot.
    ///
    /// This is a 16-character hex string (8 bytes of SHA256) so user ids
    /// never appear in file names.
    pub fn storage_name(&self) -> String {
        let hash = Sha256::digest(self.to_string().as_bytes());
        hex::encode(&hash[..8])
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("local"),
            Self::User(id) => write!(f, "user:{}", id),
        }
    }
}
