//! # Session Controller
//!
//! The event loop that owns the [`AppState`]:
//! 1. Receive a command from the front end (or an upload outcome)
//! 2. Run the reducer to get the next state
//! 3. Start or cancel the upload task when the command asks for it
//! 4. Publish the new state to watchers and reply to the sender
//!
//! Only this task ever holds the state, so actions are applied one at a
//! time, in arrival order.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use catalog::Catalog;

use crate::config::AppConfig;
use crate::state::{Action, AppState, reduce};
use crate::upload::{UploadHandle, spawn_upload};

/// Acknowledgment shown for the download stub
pub const DOWNLOAD_ACK: &str = "Improved resume downloaded!";

/// Requests the front end can make
#[derive(Debug)]
pub enum Command {
    /// Apply a state action directly. Upload lifecycle actions are
    /// ignored; use `Upload` and `CancelUpload`.
    Dispatch(Action),
    /// Start processing a resume file. `None` (nothing picked) is a no-op.
    Upload(Option<PathBuf>),
    /// Stop the upload in flight, if any
    CancelUpload,
    /// Cancel any upload and stop the loop
    Shutdown,
}

struct Envelope {
    command: Command,
    reply: oneshot::Sender<AppState>,
}

/// Owner of the application state
pub struct Controller {
    state: AppState,
    config: AppConfig,
    in_flight: Option<UploadHandle>,
    results_tx: mpsc::Sender<Action>,
    state_tx: watch::Sender<AppState>,
}

impl Controller {
    /// Start the event loop on the current tokio runtime
    pub fn spawn(catalog: Arc<Catalog>, config: AppConfig) -> ControllerHandle {
        let (commands_tx, commands_rx) = mpsc::channel(64);
        let (results_tx, results_rx) = mpsc::channel(16);

        let state = AppState::new(catalog);
        let (state_tx, state_rx) = watch::channel(state.clone());

        let controller = Controller {
            state,
            config,
            in_flight: None,
            results_tx,
            state_tx,
        };
        let task = tokio::spawn(controller.run(commands_rx, results_rx));

        ControllerHandle {
            commands: commands_tx,
            state: state_rx,
            task,
        }
    }

    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Envelope>,
        mut results: mpsc::Receiver<Action>,
    ) {
        info!("Session controller started");

        loop {
            tokio::select! {
                envelope = commands.recv() => {
                    let Some(Envelope { command, reply }) = envelope else {
                        debug!("All handles dropped");
                        break;
                    };
                    let stop = matches!(command, Command::Shutdown);
                    self.handle_command(command);
                    let _ = reply.send(self.state.clone());
                    if stop {
                        break;
                    }
                }
                Some(action) = results.recv() => {
                    if let Action::UploadCompleted { seq, .. }
                    | Action::UploadFailed { seq, .. }
                    | Action::UploadCancelled { seq } = &action
                    {
                        if self.in_flight.as_ref().is_some_and(|u| u.seq() == *seq) {
                            self.in_flight = None;
                        }
                    }
                    self.dispatch(action);
                }
            }
        }

        if let Some(upload) = self.in_flight.take() {
            upload.cancel();
        }
        info!("Session controller stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Dispatch(action) if action.is_upload_lifecycle() => {
                // A flag set from outside would have no task to clear it
                warn!("Ignoring upload action from the front end: {:?}", action);
            }
            Command::Dispatch(action) => self.dispatch(action),
            Command::Upload(None) => debug!("Upload requested without a file; ignoring"),
            Command::Upload(Some(path)) => self.start_upload(path),
            Command::CancelUpload => match &self.in_flight {
                Some(upload) => upload.cancel(),
                None => debug!("No upload in flight"),
            },
            Command::Shutdown => {
                if let Some(upload) = self.in_flight.take() {
                    upload.cancel();
                }
            }
        }
    }

    fn start_upload(&mut self, path: PathBuf) {
        // A new pick supersedes whatever is still processing
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }

        let seq = self.state.upload_seq() + 1;
        self.dispatch(Action::UploadStarted { seq });

        info!(seq, "Starting upload of {}", path.display());
        self.in_flight = Some(spawn_upload(
            path,
            seq,
            self.config.clone(),
            self.results_tx.clone(),
        ));
    }

    fn dispatch(&mut self, action: Action) {
        debug!("Applying action: {:?}", action);
        self.state = reduce(self.state.clone(), action);
        self.state_tx.send_replace(self.state.clone());
    }
}

/// Front-end side of a running controller.
///
/// Every request waits for the controller to apply it and returns the
/// resulting state.
pub struct ControllerHandle {
    commands: mpsc::Sender<Envelope>,
    state: watch::Receiver<AppState>,
    task: JoinHandle<()>,
}

impl ControllerHandle {
    pub async fn send(&self, command: Command) -> Result<AppState> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Envelope { command, reply })
            .await
            .map_err(|_| anyhow!("Session controller has stopped"))?;
        response
            .await
            .context("Session controller dropped the request")
    }

    pub async fn dispatch(&self, action: Action) -> Result<AppState> {
        self.send(Command::Dispatch(action)).await
    }

    pub async fn upload(&self, path: Option<PathBuf>) -> Result<AppState> {
        self.send(Command::Upload(path)).await
    }

    pub async fn cancel_upload(&self) -> Result<AppState> {
        self.send(Command::CancelUpload).await
    }

    /// Latest published state
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Watch every state the controller publishes
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.clone()
    }

    /// Wait until no upload is processing
    pub async fn wait_until_idle(&self) -> Result<AppState> {
        let mut state = self.state.clone();
        let idle = state
            .wait_for(|s| !s.is_processing())
            .await
            .context("Session controller stopped while processing")?;
        Ok((*idle).clone())
    }

    /// Download stub: nothing is generated
    pub fn download(&self) -> &'static str {
        info!("Download requested");
        DOWNLOAD_ACK
    }

    /// Cancel any upload, stop the loop and wait for it to exit
    pub async fn shutdown(self) -> Result<AppState> {
        let last = self.send(Command::Shutdown).await?;
        self.task.await.context("Session controller panicked")?;
        Ok(last)
    }
}
