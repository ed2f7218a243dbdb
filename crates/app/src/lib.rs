//! Application crate for CareerForge.
//!
//! This crate holds the view state of both features and the controller
//! that drives it:
//! - **state**: immutable `AppState`, the `Action`s that change it and the
//!   pure `reduce` function
//! - **suggestions**: the CareerLens suggestion list
//! - **upload**: the cancellable, simulated resume-processing task
//! - **controller**: the event loop owning the state
//! - **config**: processing delay and upload limits

pub mod config;
pub mod suggestions;
pub mod state;
pub mod upload;
pub mod controller;

pub use config::AppConfig;
pub use controller::{Command, Controller, ControllerHandle, DOWNLOAD_ACK};
pub use state::{Action, AppState, LensStatus, Tab, reduce};
pub use suggestions::SuggestionList;
pub use upload::{UploadError, UploadHandle, read_resume, spawn_upload};
