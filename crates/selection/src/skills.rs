//! The set of skills the user has picked in TryPath.

use serde::{Deserialize, Serialize};

/// Duplicate-free set of skill tags that remembers insertion order.
///
/// Results never depend on the order; it only exists so chips can be
/// displayed in the order they were picked. The set stays small (a handful
/// of tags), so a `Vec` with linear lookups beats a hashed set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSelection {
    skills: Vec<String>,
}

impl SkillSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `skill` unless already present.
    ///
    /// Returns true if the set changed.
    pub fn add(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.contains(&skill) {
            return false;
        }
        tracing::debug!("Selected skill: {}", skill);
        self.skills.push(skill);
        true
    }

    /// Remove `skill` if present, keeping the order of the rest.
    ///
    /// Returns true if the set changed.
    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        before != self.skills.len()
    }

    pub fn clear(&mut self) {
        self.skills.clear();
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Selected skills in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for skill in iter {
            selection.add(skill);
        }
        selection
    }
}
