//! Filter to keep only trials tagged with a selected skill.

use crate::traits::Filter;
use anyhow::Result;
use catalog::JobTrial;
use selection::FilterState;

/// Keeps trials sharing at least one skill with the selection.
///
/// ## Algorithm
/// 1. With no skills selected, every trial passes
/// 2. Otherwise keep a trial if any of its skills is selected
///    (exact, case-sensitive comparison)
pub struct SkillMatchFilter;

impl SkillMatchFilter {
    /// The visibility rule for a single trial
    fn matches(&self, trial: &JobTrial, state: &FilterState) -> bool {
        state.selected_skills.is_empty()
            || state
                .selected_skills
                .iter()
                .any(|skill| trial.has_skill(skill))
    }
}

impl Filter for SkillMatchFilter {
    fn name(&self) -> &str {
        "SkillMatchFilter"
    }

    fn apply<'a>(
        &self,
        trials: Vec<&'a JobTrial>,
        state: &FilterState,
    ) -> Result<Vec<&'a JobTrial>> {
        if state.selected_skills.is_empty() {
            return Ok(trials);
        }

        let filtered: Vec<&JobTrial> = trials
            .into_iter()
            .filter(|trial| self.matches(trial, state))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::TrialStatus;

    fn trial(id: &str, skills: &[&str]) -> JobTrial {
        JobTrial {
            id: id.to_string(),
            title: format!("Trial {}", id),
            company: "Acme".to_string(),
            duration: "1 week".to_string(),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            category: "Test".to_string(),
            status: TrialStatus::Available,
        }
    }

    #[test]
    fn test_skill_match_filter() {
        let a = trial("A", &["React", "CSS"]);
        let b = trial("B", &["Python"]);
        let state = FilterState::new().with_skills(["React"]);

        let filtered = SkillMatchFilter.apply(vec![&a, &b], &state).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "A");
    }

    #[test]
    fn test_any_selected_skill_is_enough() {
        let a = trial("A", &["React"]);
        let b = trial("B", &["Python"]);
        let c = trial("C", &["Go"]);
        let state = FilterState::new().with_skills(["Python", "React"]);

        let filtered = SkillMatchFilter.apply(vec![&a, &b, &c], &state).unwrap();
        let ids: Vec<_> = filtered.iter().map(|t| t.id.as_str()).collect();

        // Catalog order, not selection order
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let a = trial("A", &["React"]);
        let state = FilterState::new().with_skills(["react"]);

        let filtered = SkillMatchFilter.apply(vec![&a], &state).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_selection_passes_everything() {
        let a = trial("A", &[]);
        let b = trial("B", &["Python"]);

        let filtered = SkillMatchFilter.apply(vec![&a, &b], &FilterState::new()).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
