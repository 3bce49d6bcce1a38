//! Submission lifecycle
//!
//! A single `Submission` value describes the whole form round trip, so the
//! loading flag, the message and the result list can never disagree:
//!
//! ```text
//! Idle | Invalid | Ready | Empty | Failed --submit(blank)--> Invalid
//! Idle | Invalid | Ready | Empty | Failed --submit(filled)--> Loading
//! Loading --reply, >= 1 suggestion--> Ready
//! Loading --reply, 0 suggestions--> Empty
//! Loading --error or malformed reply--> Failed
//! ```

use crate::ai::prompt::build_prompt;
use crate::ai::provider::AiError;
use crate::ai::suggestion::{ReviewedSuggestion, parse_suggestions, review_suggestions};
use crate::links::parse_link_list;

pub const VALIDATION_MESSAGE: &str = "Please fill in both the page content and available links.";

pub const EMPTY_RESULT_MESSAGE: &str =
    "No link suggestions could be generated. Try refining your content or link list.";

pub const FAILURE_MESSAGE: &str =
    "An error occurred while generating suggestions. Check the log for details.";

/// What the user submitted, captured when the request starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedForm {
    pub page_content: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Last submit had a blank field; no request was sent
    Invalid,
    /// Waiting for the model
    Loading {
        request_id: u64,
        form: SubmittedForm,
    },
    /// At least one suggestion arrived
    Ready(Vec<ReviewedSuggestion>),
    /// The model answered with an empty list
    Empty,
    /// The request failed or the reply broke the contract
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    Info,
    Error,
}

/// User-facing message attached to a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: &'static str,
}

/// A request the caller must deliver to the suggestion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub request_id: u64,
    pub prompt: String,
}

/// Why a submit did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A request is already in flight
    Busy,
    /// Page content or link list is blank
    BlankInput,
}

#[derive(Debug, Default)]
pub struct SubmissionState {
    state: Submission,
    last_request_id: u64,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Submission {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, Submission::Loading { .. })
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        match self.state {
            Submission::Loading { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    /// Suggestions to display; empty unless the state is `Ready`
    pub fn suggestions(&self) -> &[ReviewedSuggestion] {
        match &self.state {
            Submission::Ready(suggestions) => suggestions,
            _ => &[],
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.state {
            Submission::Invalid => Some(Notice {
                kind: NoticeKind::Validation,
                text: VALIDATION_MESSAGE,
            }),
            Submission::Empty => Some(Notice {
                kind: NoticeKind::Info,
                text: EMPTY_RESULT_MESSAGE,
            }),
            Submission::Failed => Some(Notice {
                kind: NoticeKind::Error,
                text: FAILURE_MESSAGE,
            }),
            Submission::Idle | Submission::Loading { .. } | Submission::Ready(_) => None,
        }
    }

    /// Start a submission
    ///
    /// On success the state is `Loading` and the returned request must be
    /// sent exactly once. A blank field moves to `Invalid` without a request.
    pub fn begin(
        &mut self,
        page_content: &str,
        available_links: &str,
    ) -> Result<PendingRequest, Rejection> {
        if self.is_loading() {
            return Err(Rejection::Busy);
        }

        if page_content.trim().is_empty() || available_links.trim().is_empty() {
            self.state = Submission::Invalid;
            return Err(Rejection::BlankInput);
        }

        self.last_request_id = self.last_request_id.wrapping_add(1);
        let request_id = self.last_request_id;

        self.state = Submission::Loading {
            request_id,
            form: SubmittedForm {
                page_content: page_content.to_string(),
                links: parse_link_list(available_links),
            },
        };

        log::debug!("Starting suggestion request {}", request_id);

        Ok(PendingRequest {
            request_id,
            prompt: build_prompt(page_content, available_links),
        })
    }

    /// Apply the outcome of a request
    ///
    /// Returns false (and changes nothing) when `request_id` is not the
    /// request currently in flight.
    pub fn resolve(&mut self, request_id: u64, outcome: Result<String, AiError>) -> bool {
        if self.in_flight_request_id() != Some(request_id) {
            log::debug!("Discarding reply for stale request {}", request_id);
            return false;
        }

        let Submission::Loading { form, .. } = std::mem::take(&mut self.state) else {
            return false;
        };

        self.state = match outcome.and_then(|text| parse_suggestions(&text)) {
            Ok(suggestions) if suggestions.is_empty() => {
                log::info!("Request {} returned no suggestions", request_id);
                Submission::Empty
            }
            Ok(suggestions) => {
                let reviewed = review_suggestions(suggestions, &form.links);
                let flagged = reviewed.iter().filter(|s| !s.is_clean()).count();
                log::info!(
                    "Request {} returned {} suggestions ({} flagged)",
                    request_id,
                    reviewed.len(),
                    flagged
                );
                Submission::Ready(reviewed)
            }
            Err(e) => {
                log::error!("Suggestion request {} failed: {}", request_id, e);
                Submission::Failed
            }
        };

        true
    }
}

#[cfg(test)]
#[path = "submission_tests.rs"]
mod submission_tests;
