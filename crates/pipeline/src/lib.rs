//! Pipeline for filtering the TryPath trial listing.
//!
//! This crate provides:
//! - Filter trait and implementations for trial filtering
//! - FilterPipeline for composing filters
//! - TrialFilterEngine tying a shared catalog to the standard pipeline
//! - available_skills for the skill picker
//!
//! ## Architecture
//! A trial is visible when it passes every stage:
//! 1. SkillMatchFilter keeps trials tagged with any selected skill
//! 2. SearchTermFilter keeps trials mentioning the search term
//!
//! Empty inputs match everything, so an empty filter state shows the whole
//! catalog in its original order.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::TrialFilterEngine;
//! use selection::FilterState;
//!
//! let state = FilterState::new()
//!     .with_skills(["React"])
//!     .with_search_term("techcorp");
//!
//! let engine = TrialFilterEngine::new(catalog.clone());
//! let visible = engine.visible_trials(&state)?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;
pub mod skill_suggestions;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use engine::TrialFilterEngine;
pub use skill_suggestions::available_skills;
