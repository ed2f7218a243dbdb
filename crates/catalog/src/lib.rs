//! # Catalog Crate
//!
//! This crate holds the static data CareerForge presents: job trials for
//! TryPath and placeholder suggestions for CareerLens.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (JobTrial, TrialStatus, Suggestion, Catalog)
//! - **builtin**: The built-in trials, skill vocabulary and suggestions
//! - **parser**: Parse JSON catalog files
//! - **loader**: Validate trials and build a catalog from a file
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Either the built-in catalog...
//! let catalog = Catalog::builtin();
//!
//! // ...or one loaded from disk
//! let catalog = Catalog::load_from_file(Path::new("trials.json"))?;
//!
//! for trial in catalog.trials() {
//!     println!("{} at {} ({})", trial.title, trial.company, trial.status);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod builtin;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use builtin::{SKILL_VOCABULARY, builtin_trials, placeholder_suggestions};
pub use types::{
    // Type aliases
    TrialId,
    SuggestionId,
    // Core types
    Catalog,
    JobTrial,
    Suggestion,
    // Enums
    TrialStatus,
};
