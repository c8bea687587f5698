//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::persistence::ScopeKey;
use crate::ui::OutputMode;

/// Settings for the favorites CLI.
///
/// Every field is optional in the file; absent fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Directory holding one snapshot file per scope.
    pub data_dir: Option<PathBuf>,

    /// Signed-in user id. Absent means the anonymous/local scope.
    pub scope: Option<String>,

    /// Output verbosity.
    pub output: OutputMode,
}

impl FavoritesConfig {
    /// The snapshot directory, falling back to [`default_data_dir`].
    ///
    /// [`default_data_dir`]: super::default_data_dir
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(super::default_data_dir)
    }

    /// The scope selected by this configuration.
    pub fn scope_key(&self) -> ScopeKey {
        ScopeKey::from_user(self.scope.as_deref())
    }
}
