//! # Application State
//!
//! The whole view state of CareerForge as one immutable value, changed only
//! by the pure reducer [`reduce`]. Derived views (visible trials, skill
//! picker, CareerLens status) are computed on demand from the state and are
//! never stored in it.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use catalog::{Catalog, JobTrial, SKILL_VOCABULARY};
use pipeline::TrialFilterEngine;
use selection::FilterState;

use crate::suggestions::SuggestionList;

/// The two features, one per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    CareerLens,
    TryPath,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::CareerLens => f.write_str("CareerLens"),
            Tab::TryPath => f.write_str("TryPath"),
        }
    }
}

/// Every change the state can undergo.
///
/// Upload actions carry the sequence number of the upload they belong to;
/// results from a superseded upload are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),

    // TryPath
    AddSkill(String),
    RemoveSkill(String),
    ClearSkills,
    SetSearchTerm(String),

    // CareerLens
    UploadStarted { seq: u64 },
    UploadCompleted { seq: u64, text: String },
    UploadFailed { seq: u64, reason: String },
    UploadCancelled { seq: u64 },
    EditResume(String),
    ClearResume,
    ApplySuggestion(String),
    ApplyAllSuggestions,
}

impl Action {
    /// Actions that belong to the upload task's lifecycle.
    ///
    /// Only the controller produces these; front ends start and stop
    /// uploads through its commands instead.
    pub fn is_upload_lifecycle(&self) -> bool {
        matches!(
            self,
            Action::UploadStarted { .. }
                | Action::UploadCompleted { .. }
                | Action::UploadFailed { .. }
                | Action::UploadCancelled { .. }
        )
    }
}

/// What the CareerLens panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensStatus {
    /// No resume yet
    Empty,
    /// An upload is being "analyzed"
    Processing,
    /// The last upload failed
    Failed(String),
    /// Suggestions are waiting to be applied
    Suggestions(usize),
    /// A resume is loaded and nothing is left to suggest
    LooksGreat,
}

/// Immutable application state.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: TrialFilterEngine,
    active_tab: Tab,
    resume_text: Option<String>,
    suggestions: SuggestionList,
    is_processing: bool,
    upload_seq: u64,
    upload_error: Option<String>,
    filter: FilterState,
}

impl AppState {
    /// Initial state: CareerLens tab, no resume, nothing filtered
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            engine: TrialFilterEngine::new(catalog),
            active_tab: Tab::default(),
            resume_text: None,
            suggestions: SuggestionList::new(),
            is_processing: false,
            upload_seq: 0,
            upload_error: None,
            filter: FilterState::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.engine.catalog()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.resume_text.as_deref()
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    /// Sequence number of the most recent upload (0 before any upload)
    pub fn upload_seq(&self) -> u64 {
        self.upload_seq
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    // Derived views

    /// Trials passing the current skill and search filters, in catalog order
    pub fn visible_trials(&self) -> Result<Vec<&JobTrial>> {
        self.engine.visible_trials(&self.filter)
    }

    /// Skills the picker still offers
    pub fn available_skills(&self) -> Vec<&'static str> {
        pipeline::available_skills(&SKILL_VOCABULARY, &self.filter)
    }

    pub fn lens_status(&self) -> LensStatus {
        if self.is_processing {
            LensStatus::Processing
        } else if let Some(reason) = &self.upload_error {
            LensStatus::Failed(reason.clone())
        } else if !self.suggestions.is_empty() {
            LensStatus::Suggestions(self.suggestions.len())
        } else if self.resume_text.is_some() {
            LensStatus::LooksGreat
        } else {
            LensStatus::Empty
        }
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.upload_seq
    }
}

/// Apply `action` to `state`, returning the next state.
///
/// Pure: the result depends only on the arguments.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SelectTab(tab) => state.active_tab = tab,

        Action::AddSkill(skill) => {
            state.filter.selected_skills.add(skill);
        }
        Action::RemoveSkill(skill) => {
            state.filter.selected_skills.remove(&skill);
        }
        Action::ClearSkills => state.filter.selected_skills.clear(),
        Action::SetSearchTerm(term) => state.filter.search_term = term,

        Action::UploadStarted { seq } => {
            state.upload_seq = seq;
            state.is_processing = true;
            state.upload_error = None;
        }
        Action::UploadCompleted { seq, text } if state.is_current(seq) => {
            state.resume_text = non_empty(text);
            state.suggestions.reset_to_placeholder();
            state.is_processing = false;
        }
        Action::UploadFailed { seq, reason } if state.is_current(seq) => {
            state.upload_error = Some(reason);
            state.is_processing = false;
        }
        Action::UploadCancelled { seq } if state.is_current(seq) => {
            state.is_processing = false;
        }
        // Results of superseded uploads
        Action::UploadCompleted { .. }
        | Action::UploadFailed { .. }
        | Action::UploadCancelled { .. } => {}

        Action::EditResume(text) => state.resume_text = non_empty(text),
        Action::ClearResume => {
            state.resume_text = None;
            state.suggestions.apply_all();
            state.upload_error = None;
        }
        Action::ApplySuggestion(id) => {
            state.suggestions.apply(&id);
        }
        Action::ApplyAllSuggestions => state.suggestions.apply_all(),
    }
    state
}

/// An empty resume box means "no resume"
fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
