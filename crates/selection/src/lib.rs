//! # Selection Crate
//!
//! Filter inputs for the TryPath listing.
//!
//! ## Components
//!
//! ### SkillSelection
//! The skills the user has picked:
//! - Adding a present skill or removing an absent one is a no-op
//! - Insertion order is remembered for display only
//!
//! ### FilterState
//! Selected skills plus the search term, handed to every filter in the
//! pipeline crate.
//!
//! ## Example Usage
//!
//! ```ignore
//! use selection::FilterState;
//!
//! let mut state = FilterState::new().with_search_term("data");
//! state.selected_skills.add("Python");
//! state.selected_skills.add("Python"); // no-op
//! ```

// Public modules
pub mod skills;
pub mod filter_state;

// Re-export commonly used types
pub use skills::SkillSelection;
pub use filter_state::FilterState;
