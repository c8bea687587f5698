//! Error types for favorites operations.
//!
//! This module defines [`FavoritesError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation failures are raised before any state is touched
//! - Read failures are recovered inside the persistence layer (empty state)
//! - Write failures are reported but never roll back in-memory state
//! - Use `anyhow::Error` (via `FavoritesError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// A source record is missing a required field or carries a bad value.
    #[error("Invalid {kind} record: field '{field}' {message}")]
    Validation {
        kind: String,
        field: String,
        message: String,
    },

    /// A stored snapshot could not be read or decoded.
    #[error("Failed to read favorites for scope {scope}: {message}")]
    PersistenceRead { scope: String, message: String },

    /// A snapshot could not be written.
    #[error("Failed to save favorites for scope {scope}: {message}")]
    PersistenceWrite { scope: String, message: String },

    /// A kind discriminator other than `workout` or `movement`.
    #[error("Unknown favorite kind: {value} (expected 'workout' or 'movement')")]
    UnknownKind { value: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FavoritesError {
    /// Build a validation error for a record of the given kind.
    pub fn validation(
        kind: impl std::fmt::Display,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            kind: kind.to_string(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for favorites operations.
pub type Result<T> = std::result::Result<T, FavoritesError>;
