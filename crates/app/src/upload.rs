//! Simulated resume processing.
//!
//! Picking a file starts a background task that waits a fixed delay, reads
//! the file as text and reports back with a single [`Action`]. No analysis
//! happens; the delay only stands in for one.
//!
//! Each task owns a `CancellationToken`. A cancelled task reports
//! `UploadCancelled` and never completes, so tearing down a session cannot
//! race a late completion.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::state::Action;

/// Reasons an upload can fail
#[derive(Error, Debug)]
pub enum UploadError {
    /// Extension is not one of the accepted ones
    #[error("Unsupported file type for {path}; expected one of: {accepted}")]
    UnsupportedExtension { path: String, accepted: String },

    /// File exceeds the configured size limit
    #[error("{path} is {size} bytes; the limit is {max} bytes")]
    TooLarge { path: String, size: u64, max: u64 },

    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The content is not UTF-8 text (e.g. a binary PDF or DOC)
    #[error("{path} does not contain plain text")]
    NotText { path: String },
}

/// Convenience type alias for upload Results
pub type Result<T> = std::result::Result<T, UploadError>;

/// Read a resume file as text, enforcing the configured limits.
///
/// ## Checks, in order
/// 1. Extension is accepted (case-insensitive)
/// 2. Size is within `max_upload_bytes`
/// 3. Content decodes as UTF-8
pub async fn read_resume(path: &Path, config: &AppConfig) -> Result<String> {
    let display = path.display().to_string();

    if !config.accepts(path) {
        return Err(UploadError::UnsupportedExtension {
            path: display,
            accepted: config.accepted_extensions.join(", "),
        });
    }

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|source| UploadError::Read {
            path: display.clone(),
            source,
        })?;
    if metadata.len() > config.max_upload_bytes {
        return Err(UploadError::TooLarge {
            path: display,
            size: metadata.len(),
            max: config.max_upload_bytes,
        });
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| UploadError::Read {
            path: display.clone(),
            source,
        })?;

    String::from_utf8(bytes).map_err(|_| UploadError::NotText { path: display })
}

/// Handle to a running upload task.
#[derive(Debug)]
pub struct UploadHandle {
    seq: u64,
    cancel: CancellationToken,
}

impl UploadHandle {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Stop the task. It reports `UploadCancelled` unless it already
    /// finished.
    pub fn cancel(&self) {
        debug!("Cancelling upload {}", self.seq);
        self.cancel.cancel();
    }
}

/// Spawn the processing task for upload `seq`.
///
/// The outcome is sent on `results` as one of `UploadCompleted`,
/// `UploadFailed` or `UploadCancelled`.
pub fn spawn_upload(
    path: PathBuf,
    seq: u64,
    config: AppConfig,
    results: mpsc::Sender<Action>,
) -> UploadHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    tokio::spawn(async move {
        let outcome = run_upload(&path, seq, &config, token).await;
        if results.send(outcome).await.is_err() {
            debug!("Upload {} finished after the session ended", seq);
        }
    });

    UploadHandle { seq, cancel }
}

async fn run_upload(
    path: &Path,
    seq: u64,
    config: &AppConfig,
    cancel: CancellationToken,
) -> Action {
    info!(
        seq,
        delay_ms = config.processing_delay.as_millis() as u64,
        "Processing resume {}",
        path.display()
    );

    let work = async {
        tokio::time::sleep(config.processing_delay).await;
        read_resume(path, config).await
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            info!(seq, "Upload cancelled");
            Action::UploadCancelled { seq }
        }
        result = work => match result {
            Ok(text) => {
                info!(seq, chars = text.chars().count(), "Resume processed");
                Action::UploadCompleted { seq, text }
            }
            Err(e) => {
                warn!(seq, "Upload failed: {}", e);
                Action::UploadFailed { seq, reason: e.to_string() }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::Builder;

    fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_read_text_resume() {
        let file = temp_file(".txt", b"Jane Doe\nRust engineer");
        let text = read_resume(file.path(), &AppConfig::default()).await.unwrap();
        assert_eq!(text, "Jane Doe\nRust engineer");
    }

    #[tokio::test]
    async fn test_rejects_unknown_extension() {
        let file = temp_file(".md", b"# Jane");
        let result = read_resume(file.path(), &AppConfig::default()).await;
        assert!(matches!(result, Err(UploadError::UnsupportedExtension { .. })));
    }

    #[tokio::test]
    async fn test_rejects_oversized_file() {
        let file = temp_file(".txt", &[b'a'; 64]);
        let config = AppConfig::default().with_max_upload_bytes(16);
        let result = read_resume(file.path(), &config).await;
        assert!(matches!(result, Err(UploadError::TooLarge { size: 64, max: 16, .. })));
    }

    #[tokio::test]
    async fn test_rejects_binary_content() {
        // PDF header followed by bytes that are not valid UTF-8
        let file = temp_file(".pdf", b"%PDF-1.7\n\xff\xfe\x00\x81");
        let result = read_resume(file.path(), &AppConfig::default()).await;
        assert!(matches!(result, Err(UploadError::NotText { .. })));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = read_resume(Path::new("/no/such/resume.txt"), &AppConfig::default()).await;
        assert!(matches!(result, Err(UploadError::Read { .. })));
    }

    #[tokio::test]
    async fn test_spawned_upload_completes() {
        let file = temp_file(".txt", b"resume body");
        let (tx, mut rx) = mpsc::channel(4);
        let config = AppConfig::default().with_processing_delay(Duration::from_millis(5));

        let handle = spawn_upload(file.path().to_path_buf(), 7, config, tx);
        assert_eq!(handle.seq(), 7);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(
            outcome,
            Action::UploadCompleted {
                seq: 7,
                text: "resume body".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_cancelled_upload_never_completes() {
        let file = temp_file(".txt", b"resume body");
        let (tx, mut rx) = mpsc::channel(4);
        let config = AppConfig::default().with_processing_delay(Duration::from_secs(60));

        let handle = spawn_upload(file.path().to_path_buf(), 3, config, tx);
        handle.cancel();

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome, Action::UploadCancelled { seq: 3 });
        // The task sends exactly one outcome, then drops its sender
        assert!(rx.recv().await.is_none());
    }
}
