//! Catalog loading and validation.
//!
//! Turns a list of trials into a `Catalog` once every trial has been
//! checked for required fields and id uniqueness.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a JSON file
    ///
    /// Steps:
    /// 1. Parse the file
    /// 2. Validate every trial
    ///
    /// Nothing is returned unless the whole file is valid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());
        let trials = parser::parse_trials(path)?;
        let catalog = Self::from_trials(trials)?;
        info!("Loaded catalog with {} trials", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from trials after validating them
    pub fn from_trials(trials: Vec<JobTrial>) -> Result<Self> {
        validate(&trials)?;
        Ok(Self { trials })
    }
}

/// Validate trial data
///
/// Check that:
/// - ids are non-empty and unique
/// - title and company are non-empty
fn validate(trials: &[JobTrial]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(trials.len());

    for (pos, trial) in trials.iter().enumerate() {
        if trial.id.is_empty() {
            return Err(CatalogError::EmptyField {
                field: "id".to_string(),
                id: format!("#{}", pos),
            });
        }
        if !seen.insert(trial.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: trial.id.clone(),
            });
        }
        for (field, value) in [("title", &trial.title), ("company", &trial.company)] {
            if value.is_empty() {
                return Err(CatalogError::EmptyField {
                    field: field.to_string(),
                    id: trial.id.clone(),
                });
            }
        }
    }
    Ok(())
}
