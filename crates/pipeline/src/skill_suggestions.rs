//! Skills offered for selection in TryPath.
//!
//! The picker lists the vocabulary minus what is already selected,
//! narrowed by the same search term that filters the trials.

use selection::FilterState;

/// Skills the user can still add.
///
/// ## Algorithm
/// 1. Drop skills already in the selection
/// 2. Keep skills whose lower-cased text contains the lower-cased term
///    (an empty term keeps everything)
/// 3. Preserve vocabulary order
pub fn available_skills<'a>(vocabulary: &[&'a str], state: &FilterState) -> Vec<&'a str> {
    let needle = state.search_term.to_lowercase();

    vocabulary
        .iter()
        .copied()
        .filter(|skill| !state.selected_skills.contains(skill))
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .collect()
}
