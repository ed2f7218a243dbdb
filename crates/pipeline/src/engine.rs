//! The trial filter engine.
//!
//! The visible trials are a pure function of (catalog, selected skills,
//! search term). Nothing is cached between calls: every change to the
//! filter state recomputes the view from the full catalog.

use crate::filter_pipeline::FilterPipeline;
use anyhow::{Context, Result};
use catalog::{Catalog, JobTrial};
use selection::FilterState;
use std::fmt;
use std::sync::Arc;

/// A shared catalog paired with the pipeline that narrows it.
///
/// Cloning is cheap: both halves sit behind an `Arc`.
#[derive(Clone)]
pub struct TrialFilterEngine {
    catalog: Arc<Catalog>,
    pipeline: Arc<FilterPipeline>,
}

impl TrialFilterEngine {
    /// Engine running the standard skill + search pipeline
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_pipeline(catalog, FilterPipeline::standard())
    }

    pub fn with_pipeline(catalog: Arc<Catalog>, pipeline: FilterPipeline) -> Self {
        Self {
            catalog,
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Run the pipeline over the whole catalog.
    ///
    /// The result keeps catalog order.
    pub fn visible_trials(&self, state: &FilterState) -> Result<Vec<&JobTrial>> {
        let trials: Vec<&JobTrial> = self.catalog.trials().iter().collect();
        let visible = self
            .pipeline
            .apply(trials, state)
            .context("Failed to apply trial filters")?;

        tracing::debug!(
            "{} of {} trials visible (skills: {}, term: {:?})",
            visible.len(),
            self.catalog.len(),
            state.selected_skills.len(),
            state.search_term
        );
        Ok(visible)
    }
}

impl fmt::Debug for TrialFilterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrialFilterEngine")
            .field("trials", &self.catalog.len())
            .field("filters", &self.pipeline.filter_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SkillMatchFilter;

    fn ids<'a>(trials: &[&'a JobTrial]) -> Vec<&'a str> {
        trials.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_standard_engine() {
        let engine = TrialFilterEngine::new(Arc::new(Catalog::builtin()));

        let all = engine.visible_trials(&FilterState::new()).unwrap();
        assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5", "6"]);

        let state = FilterState::new()
            .with_skills(["Python"])
            .with_search_term("statistics");
        assert_eq!(ids(&engine.visible_trials(&state).unwrap()), vec!["5"]);

        let state = FilterState::new()
            .with_skills(["Python"])
            .with_search_term("react");
        assert!(engine.visible_trials(&state).unwrap().is_empty());
    }

    #[test]
    fn test_custom_pipeline() {
        let pipeline = FilterPipeline::new().add_filter(SkillMatchFilter);
        let engine = TrialFilterEngine::with_pipeline(Arc::new(Catalog::builtin()), pipeline);

        // No search stage: the term is ignored
        let state = FilterState::new()
            .with_skills(["Agile"])
            .with_search_term("zzz");
        assert_eq!(ids(&engine.visible_trials(&state).unwrap()), vec!["6"]);
    }

    #[test]
    fn test_empty_catalog() {
        let engine = TrialFilterEngine::new(Arc::new(Catalog::default()));
        let visible = engine.visible_trials(&FilterState::new()).unwrap();
        assert!(visible.is_empty());
    }

    #[test]
    fn test_debug_lists_filters() {
        let engine = TrialFilterEngine::new(Arc::new(Catalog::builtin()));
        let debug = format!("{:?}", engine);
        assert!(debug.contains("SkillMatchFilter"));
        assert!(debug.contains("SearchTermFilter"));
    }
}
