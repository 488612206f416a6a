//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for facetmap operations
#[derive(Debug, Error)]
pub enum FacetmapError {
    /// Input collection could not be read or parsed
    #[error("Input error reading {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Selection state that cannot be parsed at all (individual unknown
    /// options degrade to no-ops instead of reaching this)
    #[error("Selection error: {0}")]
    Selection(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrapped external errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FacetmapError>;
