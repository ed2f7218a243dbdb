//! Error types for the catalog crate.
//!
//! The built-in catalog never fails to build; these errors only surface
//! when a catalog is loaded from a JSON file.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file is not a JSON array of job trials
    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two trials share the same id
    #[error("Duplicate trial id: {id}")]
    DuplicateId { id: String },

    /// A required display field is empty
    ///
    /// `id` is the offending trial's id, or its position when the id
    /// itself is the empty field.
    #[error("Empty {field} for trial {id}")]
    EmptyField { field: String, id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
