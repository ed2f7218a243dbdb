//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{SearchTermFilter, SkillMatchFilter};
use crate::traits::Filter;
use anyhow::Result;
use catalog::JobTrial;
use selection::FilterState;

/// Chains multiple filters together into a processing pipeline.
///
/// A trial is visible only if every filter keeps it, so the stages are
/// ANDed together.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SkillMatchFilter)
///     .add_filter(SearchTermFilter);
///
/// let visible = pipeline.apply(catalog.trials().iter().collect(), &state)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline TryPath uses: skill filter, then search-term filter.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SkillMatchFilter)
            .add_filter(SearchTermFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the trials.
    ///
    /// ## Algorithm
    /// 1. Start with the input trials
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply<'a>(
        &self,
        trials: Vec<&'a JobTrial>,
        state: &FilterState,
    ) -> Result<Vec<&'a JobTrial>> {
        let mut current = trials;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_empty_pipeline() {
        let catalog = Catalog::builtin();
        let pipeline = FilterPipeline::new();
        let state = FilterState::new().with_skills(["React"]);

        // No filters: everything passes regardless of state
        let visible = pipeline.apply(catalog.trials().iter().collect(), &state).unwrap();
        assert_eq!(visible.len(), catalog.len());
    }

    #[test]
    fn test_single_filter() {
        let catalog = Catalog::builtin();
        let pipeline = FilterPipeline::new().add_filter(SkillMatchFilter);
        let state = FilterState::new().with_skills(["Python"]);

        let visible = pipeline.apply(catalog.trials().iter().collect(), &state).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "5");
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            FilterPipeline::standard().filter_names(),
            vec!["SkillMatchFilter", "SearchTermFilter"]
        );
    }
}
