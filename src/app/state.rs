use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

use crate::ai::provider::AiError;
use crate::ai::suggestion::ReviewedSuggestion;
use crate::ai::worker::{AiRequest, AiResponse};
use crate::clipboard::copy_to_clipboard;
use crate::config::ClipboardBackend;
use crate::links::open_in_browser;
use crate::submission::{PendingRequest, Rejection, SubmissionState};

pub const CONTENT_PLACEHOLDER: &str = "Paste the full text content of your webpage here...";
pub const LINKS_PLACEHOLDER: &str = "https://example.com/page-one\nhttps://example.com/page-two";

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Content,
    Links,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Content => Focus::Links,
            Focus::Links => Focus::Results,
            Focus::Results => Focus::Content,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Content => Focus::Results,
            Focus::Links => Focus::Content,
            Focus::Results => Focus::Links,
        }
    }
}

/// Application state
pub struct App {
    pub content: TextArea<'static>,
    pub links: TextArea<'static>,
    pub focus: Focus,
    pub submission: SubmissionState,
    /// Index of the highlighted card while results are shown
    pub selected: Option<usize>,
    /// One-line feedback for copy/open actions, shown in the footer
    pub status: Option<String>,
    pub frame_count: u64,
    pub should_quit: bool,
    clipboard_backend: ClipboardBackend,
    request_tx: Option<Sender<AiRequest>>,
    response_rx: Option<Receiver<AiResponse>>,
}

fn new_textarea(text: &str, placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::from(text.lines());
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

impl App {
    /// Create the app with optional prefilled field text
    pub fn new(page_content: &str, available_links: &str, clipboard_backend: ClipboardBackend) -> Self {
        Self {
            content: new_textarea(page_content, CONTENT_PLACEHOLDER),
            links: new_textarea(available_links, LINKS_PLACEHOLDER),
            focus: Focus::Content,
            submission: SubmissionState::new(),
            selected: None,
            status: None,
            frame_count: 0,
            should_quit: false,
            clipboard_backend,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Connect the app to the suggestion worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AiRequest>,
        response_rx: Receiver<AiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page_content(&self) -> String {
        self.content.lines().join("\n")
    }

    pub fn available_links(&self) -> String {
        self.links.lines().join("\n")
    }

    /// Validate the form and send a request to the worker
    pub fn submit(&mut self) {
        let page_content = self.page_content();
        let available_links = self.available_links();

        match self.submission.begin(&page_content, &available_links) {
            Ok(request) => {
                self.selected = None;
                self.status = None;
                self.dispatch(request);
            }
            Err(Rejection::BlankInput) => {
                self.selected = None;
            }
            Err(Rejection::Busy) => {}
        }
    }

    fn dispatch(&mut self, request: PendingRequest) {
        let PendingRequest { request_id, prompt } = request;

        let sent = match &self.request_tx {
            Some(tx) => tx.send(AiRequest::Suggest { prompt, request_id }).is_ok(),
            None => false,
        };

        if !sent {
            self.submission.resolve(
                request_id,
                Err(AiError::NotConfigured(
                    "suggestion worker is not running".to_string(),
                )),
            );
        }
    }

    /// Drain worker responses without blocking
    pub fn poll_worker(&mut self) {
        let mut responses = Vec::new();
        let mut disconnected = false;

        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        for response in responses {
            let (request_id, outcome) = response.into_outcome();
            if self.submission.resolve(request_id, outcome) {
                self.selected = if self.submission.suggestions().is_empty() {
                    None
                } else {
                    Some(0)
                };
            }
        }

        if disconnected {
            self.response_rx = None;
            if let Some(request_id) = self.submission.in_flight_request_id() {
                self.submission.resolve(
                    request_id,
                    Err(AiError::Network("suggestion worker stopped".to_string())),
                );
            }
        }
    }

    /// Advance one UI frame
    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.poll_worker();
    }

    pub fn selected_suggestion(&self) -> Option<&ReviewedSuggestion> {
        self.selected
            .and_then(|index| self.submission.suggestions().get(index))
    }

    pub fn select_next(&mut self) {
        let count = self.submission.suggestions().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1).min(count - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        let count = self.submission.suggestions().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => index.saturating_sub(1),
            None => 0,
        });
    }

    pub fn select_first(&mut self) {
        if !self.submission.suggestions().is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        let count = self.submission.suggestions().len();
        if count > 0 {
            self.selected = Some(count - 1);
        }
    }

    pub fn copy_selected_link(&mut self) {
        let Some(link) = self.selected_suggestion().map(|s| s.suggestion.link.clone()) else {
            return;
        };

        self.status = Some(match copy_to_clipboard(&link, self.clipboard_backend) {
            Ok(()) => "Copied link to clipboard".to_string(),
            Err(e) => {
                log::warn!("Copy failed: {}", e);
                format!("Copy failed: {}", e)
            }
        });
    }

    pub fn open_selected_link(&mut self) {
        let Some(link) = self.selected_suggestion().map(|s| s.suggestion.link.clone()) else {
            return;
        };

        self.status = Some(match open_in_browser(&link) {
            Ok(()) => format!("Opened {}", link),
            Err(e) => {
                log::warn!("Could not open {}: {}", link, e);
                e.to_string()
            }
        });
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
