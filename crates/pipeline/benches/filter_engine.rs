//! Benchmarks for the trial filter engine
//!
//! Run with: cargo bench --package pipeline
//!
//! Times the standard pipeline on the built-in catalog and on a catalog of
//! a few thousand synthetic trials, with and without a search stage.

use catalog::{Catalog, JobTrial, TrialStatus, builtin_trials};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::filters::SkillMatchFilter;
use pipeline::{FilterPipeline, TrialFilterEngine};
use selection::FilterState;
use std::sync::Arc;

fn large_catalog() -> Arc<Catalog> {
    let base = builtin_trials();
    let trials: Vec<JobTrial> = (0..5_000)
        .map(|i| {
            let mut trial = base[i % base.len()].clone();
            trial.id = format!("t{}", i);
            trial.status = match i % 3 {
                0 => TrialStatus::Available,
                1 => TrialStatus::InProgress,
                _ => TrialStatus::Completed,
            };
            trial
        })
        .collect();
    Arc::new(Catalog::from_trials(trials).expect("synthetic catalog is valid"))
}

fn bench_builtin(c: &mut Criterion) {
    let engine = TrialFilterEngine::new(Arc::new(Catalog::builtin()));
    let state = FilterState::new()
        .with_skills(["React", "Python"])
        .with_search_term("data");

    c.bench_function("filter_builtin", |b| {
        b.iter(|| {
            let visible = engine.visible_trials(black_box(&state)).unwrap();
            black_box(visible.len())
        })
    });
}

fn bench_large(c: &mut Criterion) {
    let catalog = large_catalog();
    let engine = TrialFilterEngine::new(catalog.clone());
    let skills_only = TrialFilterEngine::with_pipeline(
        catalog,
        FilterPipeline::new().add_filter(SkillMatchFilter),
    );
    let state = FilterState::new()
        .with_skills(["SEO", "Agile", "UX Design"])
        .with_search_term("product");

    c.bench_function("filter_large_standard", |b| {
        b.iter(|| {
            let visible = engine.visible_trials(black_box(&state)).unwrap();
            black_box(visible.len())
        })
    });

    c.bench_function("filter_large_skills_only", |b| {
        b.iter(|| {
            let visible = skills_only.visible_trials(black_box(&state)).unwrap();
            black_box(visible.len())
        })
    });
}

criterion_group!(benches, bench_builtin, bench_large);
criterion_main!(benches);
