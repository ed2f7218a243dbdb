//! Integration tests for the pipeline.
//!
//! These tests check the observable contract of the filter engine
//! against small hand-built catalogs and the built-in one.

use catalog::{Catalog, JobTrial, TrialStatus};
use pipeline::filters::*;
use pipeline::{FilterPipeline, TrialFilterEngine};
use proptest::prelude::*;
use selection::FilterState;
use std::sync::Arc;

fn trial(id: &str, company: &str, skills: &[&str]) -> JobTrial {
    JobTrial {
        id: id.to_string(),
        title: format!("Role {}", id),
        company: company.to_string(),
        duration: "2 weeks".to_string(),
        description: "Short placement.".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        category: "General".to_string(),
        status: TrialStatus::Available,
    }
}

/// Run the standard pipeline over a plain slice of trials
fn visible<'a>(trials: &'a [JobTrial], state: &FilterState) -> Vec<&'a JobTrial> {
    FilterPipeline::standard()
        .apply(trials.iter().collect(), state)
        .unwrap()
}

fn ids<'a>(trials: &[&'a JobTrial]) -> Vec<&'a str> {
    trials.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_empty_filter_is_identity() {
    let catalog = Catalog::builtin();
    let all = visible(catalog.trials(), &FilterState::new());

    let expected: Vec<&JobTrial> = catalog.trials().iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn test_skill_filter_selects_exactly_matching_trials() {
    let trials = vec![trial("A", "X", &["React", "CSS"]), trial("B", "Y", &["Python"])];
    let state = FilterState::new().with_skills(["React"]);

    assert_eq!(ids(&visible(&trials, &state)), vec!["A"]);
}

#[test]
fn test_text_filter_is_case_insensitive() {
    let trials = vec![trial("A", "TechCorp", &[]), trial("B", "Other", &[])];
    let state = FilterState::new().with_search_term("techcorp");

    assert_eq!(ids(&visible(&trials, &state)), vec!["A"]);
}

#[test]
fn test_skill_and_text_filters_are_anded() {
    let trials = vec![trial("A", "Acme", &["React"])];

    let included = FilterState::new().with_skills(["React"]).with_search_term("Acme");
    assert_eq!(ids(&visible(&trials, &included)), vec!["A"]);

    let excluded = FilterState::new().with_skills(["React"]).with_search_term("Zzz");
    assert!(visible(&trials, &excluded).is_empty());
}

#[test]
fn test_builtin_catalog_scenarios() {
    let engine = TrialFilterEngine::new(Arc::new(Catalog::builtin()));

    // Data Analysis tags trial 5 only
    let state = FilterState::new().with_skills(["Data Analysis"]);
    assert_eq!(ids(&engine.visible_trials(&state).unwrap()), vec!["5"]);

    // React (trial 1) or Agile (trial 6), listed in catalog order
    let state = FilterState::new().with_skills(["Agile", "React"]);
    assert_eq!(ids(&engine.visible_trials(&state).unwrap()), vec!["1", "6"]);

    // "data" hits trial 2's skills, trial 5's title and description
    let state = FilterState::new().with_search_term("data");
    assert_eq!(ids(&engine.visible_trials(&state).unwrap()), vec!["2", "5"]);

    // A selected skill nobody has hides everything
    let state = FilterState::new().with_skills(["Machine Learning"]);
    assert!(engine.visible_trials(&state).unwrap().is_empty());
}

#[test]
fn test_pipeline_order_does_not_change_result() {
    let catalog = Catalog::builtin();
    let reversed = FilterPipeline::new()
        .add_filter(SearchTermFilter)
        .add_filter(SkillMatchFilter);
    let state = FilterState::new()
        .with_skills(["Python", "SEO"])
        .with_search_term("content");

    let forward = FilterPipeline::standard()
        .apply(catalog.trials().iter().collect(), &state)
        .unwrap();
    let backward = reversed
        .apply(catalog.trials().iter().collect(), &state)
        .unwrap();

    assert_eq!(ids(&forward), vec!["4"]);
    assert_eq!(forward, backward);
}

fn arb_trials() -> impl Strategy<Value = Vec<JobTrial>> {
    let skill = prop::sample::select(vec!["React", "Python", "SQL", "SEO", "Agile"]);
    let company = prop::sample::select(vec!["TechCorp", "Acme", "DataSystems"]);
    prop::collection::vec((company, prop::collection::vec(skill, 0..3)), 0..12).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (company, skills))| trial(&i.to_string(), company, &skills))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_filter_is_pure_and_order_preserving(
        trials in arb_trials(),
        skills in prop::collection::vec("React|Python|SQL|Go", 0..3),
        term in prop::sample::select(vec!["", "acme", "TECH", "sql", "role 1", " "]),
    ) {
        let state = FilterState::new().with_skills(skills).with_search_term(term);

        let first = visible(&trials, &state);
        let second = visible(&trials, &state);
        prop_assert_eq!(&first, &second);

        // Output is a subsequence of the catalog
        let positions: Vec<usize> = first
            .iter()
            .map(|t| trials.iter().position(|c| c.id == t.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_empty_state_returns_everything(trials in arb_trials()) {
        let all = visible(&trials, &FilterState::new());
        prop_assert_eq!(all.len(), trials.len());
    }
}
