//! The CareerLens suggestion list.

use catalog::{Suggestion, placeholder_suggestions};

/// Ordered list of pending resume suggestions.
///
/// Applying a suggestion only removes it from the list; resume text is
/// never rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with the placeholder suggestions
    pub fn reset_to_placeholder(&mut self) {
        self.items = placeholder_suggestions();
    }

    /// Remove the suggestion with `id`, keeping the others in order.
    ///
    /// Returns false if no suggestion had that id.
    pub fn apply(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s.id != id);
        before != self.items.len()
    }

    /// Drop every suggestion
    pub fn apply_all(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: &str) -> Option<&Suggestion> {
        self.items.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
