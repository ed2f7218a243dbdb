//! Filter to keep trials mentioning the search term.
//!
//! The term is matched case-insensitively as a substring of the title,
//! company, description or any skill tag. Category and duration are
//! never searched.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobTrial;
use selection::FilterState;

/// Keeps trials whose text fields contain the search term.
///
/// ## Algorithm
/// 1. With an empty term, every trial passes
/// 2. Lower-case the term once
/// 3. Keep a trial if any searchable field, lower-cased, contains it
pub struct SearchTermFilter;

/// `needle` must already be lower-case
fn mentions(trial: &JobTrial, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(trial.title.as_str())
        || contains(trial.company.as_str())
        || contains(trial.description.as_str())
        || trial.skills.iter().any(|skill| contains(skill.as_str()))
}

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn apply<'a>(
        &self,
        trials: Vec<&'a JobTrial>,
        state: &FilterState,
    ) -> Result<Vec<&'a JobTrial>> {
        let Some(needle) = state.search_needle() else {
            return Ok(trials);
        };

        let filtered: Vec<&JobTrial> = trials
            .into_iter()
            .filter(|trial| mentions(trial, &needle))
            .collect();
        Ok(filtered)
    }
}
