//! Configuration loading for the favorites CLI.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use myfc_favorites::config::load_config;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "scope: alice").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert_eq!(config.scope.as_deref(), Some("alice"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, default_config_path, default_data_dir, load_config, load_config_file,
    load_resolved_config, parse_config, ENV_DATA_DIR, ENV_SCOPE,
};
pub use schema::FavoritesConfig;
