//! The inputs of the trial filter.
//!
//! `FilterState` gathers everything a filter needs to decide whether a
//! trial is visible, so filters never reach back into application state.

use crate::skills::SkillSelection;
use serde::{Deserialize, Serialize};

/// Selected skills plus the free-text search term.
///
/// The search term is kept exactly as typed. It is neither trimmed nor
/// lower-cased here; leading and trailing spaces take part in matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_skills: SkillSelection,
    pub search_term: String,
}

impl FilterState {
    /// An empty state: no skills selected, no search term
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: select the given skills (duplicates collapse)
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for skill in skills {
            self.selected_skills.add(skill);
        }
        self
    }

    /// Builder: set the search term
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Lower-cased search term for case-insensitive matching, or `None`
    /// when there is no term.
    pub fn search_needle(&self) -> Option<String> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }
}
