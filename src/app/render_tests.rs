//! Rendering tests using ratatui's TestBackend

use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::ai::worker::{AiRequest, AiResponse};
use crate::config::ClipboardBackend;
use crate::submission::{EMPTY_RESULT_MESSAGE, FAILURE_MESSAGE, VALIDATION_MESSAGE};
use crate::test_utils::test_helpers::{SAMPLE_CONTENT, SAMPLE_LINKS, SAMPLE_REPLY};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

fn app_with_worker() -> (App, Receiver<AiRequest>, Sender<AiResponse>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut app = App::new(SAMPLE_CONTENT, SAMPLE_LINKS, ClipboardBackend::Osc52);
    app.set_channels(request_tx, response_rx);
    (app, request_rx, response_tx)
}

fn resolve_with(app: &mut App, requests: &Receiver<AiRequest>, responses: &Sender<AiResponse>, reply: &str) {
    app.submit();
    let AiRequest::Suggest { request_id, .. } = requests.try_recv().unwrap();
    responses
        .send(AiResponse::Reply {
            request_id,
            text: reply.to_string(),
        })
        .unwrap();
    app.poll_worker();
}

#[test]
fn test_idle_layout() {
    let mut app = App::new("", "", ClipboardBackend::Osc52);
    let output = render_to_string(&mut app, WIDTH, HEIGHT);

    assert!(output.contains(TITLE));
    assert!(output.contains("Page Content"));
    assert!(output.contains("Available Links (one per line)"));
    assert!(output.contains(SUBMIT_LABEL));
    assert!(output.contains("Suggestions"));
    assert!(output.contains("F5/Ctrl+G: generate"));
}

#[test]
fn test_placeholders_shown_for_empty_fields() {
    let mut app = App::new("", "", ClipboardBackend::Osc52);
    let output = render_to_string(&mut app, WIDTH, HEIGHT);

    assert!(output.contains("Paste the full text content of your webpage"));
    assert!(output.contains("https://example.com/page-one"));
}

#[test]
fn test_loading_shows_spinner_and_disabled_button() {
    let (mut app, _requests, _responses) = app_with_worker();
    app.submit();

    let output = render_to_string(&mut app, WIDTH, HEIGHT);

    assert!(output.contains(LOADING_LABEL));
    assert!(!output.contains(SUBMIT_LABEL));
    assert!(output.contains(LOADING_MESSAGE));
    assert!(output.contains(SPINNER_FRAMES[0]));
}

#[test]
fn test_spinner_advances_with_frames() {
    let (mut app, _requests, _responses) = app_with_worker();
    app.submit();
    app.frame_count = 3;

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains(SPINNER_FRAMES[3]));
}

#[test]
fn test_validation_message_rendered() {
    let mut app = App::new("", SAMPLE_LINKS, ClipboardBackend::Osc52);
    app.submit();

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains(VALIDATION_MESSAGE));
}

#[test]
fn test_failure_message_rendered() {
    let mut app = App::new(SAMPLE_CONTENT, SAMPLE_LINKS, ClipboardBackend::Osc52);
    app.submit();

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains(FAILURE_MESSAGE));
    assert!(output.contains(SUBMIT_LABEL));
}

#[test]
fn test_empty_result_message_rendered() {
    let (mut app, requests, responses) = app_with_worker();
    resolve_with(&mut app, &requests, &responses, r#"{"suggestions":[]}"#);

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains(EMPTY_RESULT_MESSAGE));
}

#[test]
fn test_cards_rendered() {
    let (mut app, requests, responses) = app_with_worker();
    resolve_with(&mut app, &requests, &responses, SAMPLE_REPLY);

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains("Suggestions (1)"));
    assert!(output.contains("Sourdough needs a lively starter."));
    assert!(output.contains("Link to: https://example.com/starter-guide"));
    assert!(!output.contains(LOADING_MESSAGE));
}

#[test]
fn test_flagged_card_shows_warning() {
    let (mut app, requests, responses) = app_with_worker();
    let reply = r#"{"suggestions":[{"anchorText":"rye","link":"https://other.example/rye","context":"Sourdough needs a lively starter."}]}"#;
    resolve_with(&mut app, &requests, &responses, reply);

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains("Anchor text not found verbatim in context"));
    assert!(output.contains("Link is not in your list"));
}

#[test]
fn test_selected_card_scrolled_into_view() {
    let (mut app, requests, responses) = app_with_worker();
    let items: Vec<String> = (0..12)
        .map(|i| {
            format!(
                r#"{{"anchorText":"item{i}","link":"https://example.com/flour","context":"context for item{i}"}}"#
            )
        })
        .collect();
    let reply = format!(r#"{{"suggestions":[{}]}}"#, items.join(","));
    resolve_with(&mut app, &requests, &responses, &reply);
    app.focus = Focus::Results;
    app.select_last();

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains("context for item11"));
    assert!(!output.contains("context for item0 "));
}

#[test]
fn test_status_replaces_hints() {
    let mut app = App::new("", "", ClipboardBackend::Osc52);
    app.status = Some("Copied link to clipboard".to_string());

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains("Copied link to clipboard"));
    assert!(!output.contains("F5/Ctrl+G: generate"));
}

#[test]
fn test_results_focus_hints() {
    let mut app = App::new("", "", ClipboardBackend::Osc52);
    app.focus = Focus::Results;

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains("y: copy link"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let (mut app, requests, responses) = app_with_worker();
    resolve_with(&mut app, &requests, &responses, SAMPLE_REPLY);

    let _ = render_to_string(&mut app, 20, 8);
}
