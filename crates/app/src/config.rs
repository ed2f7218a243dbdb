//! Runtime settings for a CareerForge session.

use std::path::Path;
use std::time::Duration;

/// Extensions the resume picker accepts
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// Advisory upload limit shown next to the picker (5 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Configuration for the simulated resume processing.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Artificial delay between picking a file and showing suggestions
    /// (default: 1500 ms).
    pub processing_delay: Duration,
    /// Largest resume file accepted, in bytes (default: 5 MiB).
    pub max_upload_bytes: u64,
    /// Accepted file extensions, lower-case and without the dot.
    pub accepted_extensions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(1500),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            accepted_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    pub fn with_max_upload_bytes(mut self, max: u64) -> Self {
        self.max_upload_bytes = max;
        self
    }

    /// Case-insensitive extension check
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.accepted_extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}
