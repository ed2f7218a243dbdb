//! Core domain types for CareerForge.
//!
//! This module defines the records shown by the two features:
//! - `JobTrial` and `TrialStatus` for the TryPath listing
//! - `Suggestion` for the CareerLens viewer
//! - `Catalog`, the immutable, ordered collection of trials

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a job trial, stable for the process lifetime
pub type TrialId = String;

/// Unique identifier for a resume suggestion
pub type SuggestionId = String;

// =============================================================================
// Job Trials
// =============================================================================

/// A short-term job placement offering listed in TryPath.
///
/// Every field is required. A catalog file missing any of them fails to
/// deserialize instead of producing a half-filled record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTrial {
    pub id: TrialId,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    /// Skill tags in display order
    pub skills: Vec<String>,
    /// Display-only classification; filtering never looks at it
    pub category: String,
    pub status: TrialStatus,
}

impl JobTrial {
    /// Returns true if this trial is tagged with `skill` (exact match).
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Lifecycle state of a trial. Fixed per record in this application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrialStatus {
    Available,
    InProgress,
    Completed,
}

impl TrialStatus {
    /// Human-readable badge text
    pub fn label(&self) -> &'static str {
        match self {
            TrialStatus::Available => "Available",
            TrialStatus::InProgress => "In Progress",
            TrialStatus::Completed => "Completed",
        }
    }

    /// Text of the call-to-action button for a trial in this state
    pub fn action_label(&self) -> &'static str {
        match self {
            TrialStatus::Available => "Start Trial",
            TrialStatus::InProgress => "Continue Trial",
            TrialStatus::Completed => "View Details",
        }
    }

    /// Only available trials can be started
    pub fn can_start(&self) -> bool {
        matches!(self, TrialStatus::Available)
    }
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Resume Suggestions
// =============================================================================

/// A proposed resume edit pairing original text with an improved variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub category: String,
    pub title: String,
    pub description: String,
    pub original: String,
    pub improved: String,
}

// =============================================================================
// Catalog - The Immutable Trial Listing
// =============================================================================

/// Ordered, immutable collection of job trials.
///
/// Built once at startup and shared behind an `Arc`. The trial order is the
/// order every filtered view preserves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) trials: Vec<JobTrial>,
}

impl Catalog {
    /// All trials in catalog order
    pub fn trials(&self) -> &[JobTrial] {
        &self.trials
    }

    /// Distinct skills used anywhere in the catalog, in first-seen order
    pub fn skills(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for trial in &self.trials {
            for skill in &trial.skills {
                if !seen.contains(&skill.as_str()) {
                    seen.push(skill.as_str());
                }
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}
