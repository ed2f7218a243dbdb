//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets independent visibility
//! rules be composed over the trial catalog.

use anyhow::Result;
use catalog::JobTrial;
use selection::FilterState;

/// Core trait for filtering trials.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across tasks
/// - Filters work on borrowed trials: the catalog is never cloned, and the
///   output borrows from the same catalog as the input
/// - Filters must keep the relative order of the trials they keep
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of trials.
    ///
    /// # Arguments
    /// * `trials` - The trials still visible after earlier filters
    /// * `state` - Selected skills and search term
    ///
    /// # Returns
    /// * `Ok(Vec<&JobTrial>)` - The trials that pass, in input order
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        trials: Vec<&'a JobTrial>,
        state: &FilterState,
    ) -> Result<Vec<&'a JobTrial>>;
}
