use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Focus};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Handle at most one terminal event, waiting up to one poll interval
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        self.status = None;

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Content | Focus::Links => self.handle_form_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    pub(crate) fn handle_paste(&mut self, text: &str) {
        if self.submission.is_loading() {
            return;
        }
        // Terminals send CR line endings inside bracketed paste
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        match self.focus {
            Focus::Content => {
                self.content.insert_str(text);
            }
            Focus::Links => {
                self.links.insert_str(text);
            }
            Focus::Results => {}
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        if key.code == KeyCode::F(5) || (ctrl && key.code == KeyCode::Char('g')) {
            self.submit();
            return true;
        }

        match key.code {
            KeyCode::Tab if !ctrl => {
                self.focus = self.focus.next();
                true
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                true
            }
            _ => false,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // Fields are read-only while a request is in flight
        if self.submission.is_loading() {
            return;
        }

        if key.code == KeyCode::Esc {
            self.focus = Focus::Results;
            return;
        }

        let textarea = match self.focus {
            Focus::Content => &mut self.content,
            _ => &mut self.links,
        };
        textarea.input(key);
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            KeyCode::Char('y') => self.copy_selected_link(),
            KeyCode::Char('o') | KeyCode::Enter => self.open_selected_link(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
