//! Configuration file discovery and loading.
//!
//! Resolution order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file: `--config <path>`, or `~/.myfc/config.yml` if present
//! 3. Environment: `MYFC_DATA_DIR`, `MYFC_SCOPE`
//! 4. Command-line flags (applied by the CLI)

use std::fs;
use std::path::{Path, PathBuf};

use super::FavoritesConfig;
use crate::error::{FavoritesError, Result};

/// Environment variable overriding the snapshot directory.
pub const ENV_DATA_DIR: &str = "MYFC_DATA_DIR";

/// Environment variable overriding the signed-in user id.
pub const ENV_SCOPE: &str = "MYFC_SCOPE";

/// Base directory for user-level files: `~/.myfc`.
fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".myfc")
}

/// Default snapshot directory: `~/.myfc/favorites`.
pub fn default_data_dir() -> PathBuf {
    base_dir().join("favorites")
}

/// Default config path: `~/.myfc/config.yml`.
pub fn default_config_path() -> PathBuf {
    base_dir().join("config.yml")
}

/// Parse configuration from YAML text.
pub fn parse_config(content: &str, path: &Path) -> Result<FavoritesConfig> {
    if content.trim().is_empty() {
        return Ok(FavoritesConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| FavoritesError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a specific config file.
pub fn load_config_file(path: &Path) -> Result<FavoritesConfig> {
    if !path.exists() {
        return Err(FavoritesError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load configuration from an explicit path or the default location.
///
/// An explicit path must exist. The default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<FavoritesConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                load_config_file(&path)
            } else {
                tracing::debug!("No config at {:?}, using defaults", path);
                Ok(FavoritesConfig::default())
            }
        }
    }
}

/// Apply environment overrides using a custom lookup.
pub fn apply_env_overrides<F>(config: &mut FavoritesConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
        config.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(scope) = lookup(ENV_SCOPE) {
        let scope = scope.trim().to_string();
        config.scope = if scope.is_empty() { None } else { Some(scope) };
    }
}

/// Load configuration and apply process environment overrides.
pub fn load_resolved_config(explicit: Option<&Path>) -> Result<FavoritesConfig> {
    let mut config = load_config(explicit)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}
