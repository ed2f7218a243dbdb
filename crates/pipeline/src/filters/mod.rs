//! Filter implementations for the trial pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod skill_match;
pub mod search_term;

// Re-export for convenience
pub use skill_match::SkillMatchFilter;
pub use search_term::SearchTermFilter;
