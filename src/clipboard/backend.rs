//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("System clipboard is not available")]
    SystemUnavailable,

    #[error("Failed to write to clipboard")]
    WriteError,
}

/// Copy text using the configured backend
///
/// `Auto` tries the system clipboard first and falls back to OSC 52, which
/// works over SSH and inside most terminal multiplexers.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("{}; falling back to OSC 52", e);
            osc52::copy(text)
        }),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
