//! AI Worker Thread
//!
//! Handles suggestion requests in a background thread so the UI keeps
//! drawing while Gemini works. The thread owns a current-thread tokio
//! runtime and the provider; requests and replies travel over std channels.

use std::sync::mpsc::{Receiver, Sender};

use tokio::runtime::Runtime;

use super::prompt::response_schema;
use super::provider::{AiError, AiProvider};
use crate::config::AiConfig;

/// Request messages sent to the AI worker thread
#[derive(Debug)]
pub enum AiRequest {
    /// Ask for link suggestions for an assembled prompt
    Suggest {
        prompt: String,
        /// ID of the submission this request belongs to
        request_id: u64,
    },
}

/// Response messages received from the AI worker thread
#[derive(Debug)]
pub enum AiResponse {
    /// The model answered; `text` is the raw reply, not yet parsed
    Reply { request_id: u64, text: String },
    /// The request failed before a reply was available
    Failed { request_id: u64, error: AiError },
}

impl AiResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            AiResponse::Reply { request_id, .. } | AiResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }

    /// Collapse into the outcome the submission state machine consumes
    pub fn into_outcome(self) -> (u64, Result<String, AiError>) {
        match self {
            AiResponse::Reply { request_id, text } => (request_id, Ok(text)),
            AiResponse::Failed { request_id, error } => (request_id, Err(error)),
        }
    }
}

/// Spawn the AI worker thread
///
/// A provider that cannot be built from `config` is not an error here; every
/// request is answered with the configuration error instead.
pub fn spawn_worker(
    config: &AiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let provider_result = AiProvider::from_config(config);

    std::thread::spawn(move || {
        worker_loop(provider_result, request_rx, response_tx);
    });
}

fn build_runtime() -> Result<Runtime, AiError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(runtime_unavailable)
}

pub(crate) fn runtime_unavailable(e: std::io::Error) -> AiError {
    AiError::Runtime(format!("failed to start async runtime: {e}"))
}

/// Main worker loop - processes requests until the channel is closed
pub(crate) fn worker_loop(
    provider_result: Result<AiProvider, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    if let Err(e) = &provider_result {
        // Reported per request, not at startup
        log::debug!("AI provider not configured: {}", e);
    }

    let runtime = build_runtime();
    if let Err(e) = &runtime {
        log::error!("{}", e);
    }

    while let Ok(request) = request_rx.recv() {
        match request {
            AiRequest::Suggest { prompt, request_id } => {
                log::debug!("Handling suggestion request {}", request_id);

                let outcome = match (&provider_result, &runtime) {
                    (Err(e), _) | (_, Err(e)) => Err(e.clone()),
                    (Ok(provider), Ok(runtime)) => {
                        runtime.block_on(provider.generate(&prompt, &response_schema()))
                    }
                };

                let response = match outcome {
                    Ok(text) => AiResponse::Reply { request_id, text },
                    Err(error) => AiResponse::Failed { request_id, error },
                };

                if response_tx.send(response).is_err() {
                    // Main thread disconnected
                    break;
                }
            }
        }
    }

    log::debug!("AI worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
