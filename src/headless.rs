//! Print mode: one submission without the terminal UI
//!
//! Drives the same submission state machine as the TUI, awaiting the
//! provider directly on a current-thread runtime.

use crate::ai::prompt::response_schema;
use crate::ai::provider::{AiError, AiProvider};
use crate::config::AiConfig;
use crate::error::LinkwiseError;
use crate::render::{OutputFormat, render};
use crate::submission::{Submission, SubmissionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStatus {
    /// Suggestions were produced, or the model found none
    Success,
    /// A required field was blank
    Invalid,
    /// The request failed
    Failed,
}

impl PrintStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            PrintStatus::Success => 0,
            PrintStatus::Failed => 1,
            PrintStatus::Invalid => 2,
        }
    }
}

#[derive(Debug)]
pub struct PrintOutcome {
    /// Rendered suggestions for stdout
    pub output: Option<String>,
    /// User-facing message for stderr
    pub notice: Option<&'static str>,
    pub status: PrintStatus,
}

pub fn run(
    config: &AiConfig,
    page_content: &str,
    available_links: &str,
    format: OutputFormat,
) -> Result<PrintOutcome, LinkwiseError> {
    run_with_provider(
        AiProvider::from_config(config),
        page_content,
        available_links,
        format,
    )
}

pub fn run_with_provider(
    provider: Result<AiProvider, AiError>,
    page_content: &str,
    available_links: &str,
    format: OutputFormat,
) -> Result<PrintOutcome, LinkwiseError> {
    let mut submission = SubmissionState::new();

    // Blank input leaves the state at Invalid
    if let Ok(request) = submission.begin(page_content, available_links) {
        let outcome = match provider {
            Ok(provider) => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(LinkwiseError::Runtime)?;
                runtime.block_on(provider.generate(&request.prompt, &response_schema()))
            }
            Err(e) => Err(e),
        };
        submission.resolve(request.request_id, outcome);
    }

    summarize(&submission, format)
}

fn summarize(
    submission: &SubmissionState,
    format: OutputFormat,
) -> Result<PrintOutcome, LinkwiseError> {
    let notice = submission.notice().map(|n| n.text);

    let (output, status) = match submission.state() {
        Submission::Ready(suggestions) => (Some(render(format, suggestions)?), PrintStatus::Success),
        Submission::Empty => {
            // JSON consumers still get a document
            let rendered = render(format, &[])?;
            let output = (!rendered.is_empty()).then_some(rendered);
            (output, PrintStatus::Success)
        }
        Submission::Invalid => (None, PrintStatus::Invalid),
        Submission::Failed | Submission::Idle | Submission::Loading { .. } => {
            (None, PrintStatus::Failed)
        }
    };

    Ok(PrintOutcome {
        output,
        notice,
        status,
    })
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod headless_tests;
