use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::render::cards::build_cards;
use crate::submission::{NoticeKind, Submission};

pub const TITLE: &str = "Contextual Link Suggester";
pub const SUBTITLE: &str =
    "Paste your content and links to get AI-powered contextual link suggestions.";
pub const SUBMIT_LABEL: &str = "[ Generate Suggestions ]";
pub const LOADING_LABEL: &str = "[ Analyzing... ]";
pub const LOADING_MESSAGE: &str = "Gemini is analyzing your content...";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(2),
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        self.render_form(frame, layout[1]);
        self.render_submit_line(frame, layout[2]);
        self.render_results(frame, layout[3]);
        self.render_footer(frame, layout[4]);
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame_count % SPINNER_FRAMES.len() as u64) as usize]
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_form(&mut self, frame: &mut Frame, area: Rect) {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        let loading = self.submission.is_loading();
        let content_focused = self.focus == Focus::Content && !loading;
        let links_focused = self.focus == Focus::Links && !loading;

        self.content.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Page Content ")
                .border_style(border_style(content_focused)),
        );
        self.links.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Available Links (one per line) ")
                .border_style(border_style(links_focused)),
        );

        // Hide the cursor in fields that are not being edited
        self.content.set_cursor_style(if content_focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        self.links.set_cursor_style(if links_focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        frame.render_widget(&self.content, columns[0]);
        frame.render_widget(&self.links, columns[1]);
    }

    fn render_submit_line(&self, frame: &mut Frame, area: Rect) {
        let line = if self.submission.can_submit() {
            Line::from(vec![
                Span::styled(
                    SUBMIT_LABEL,
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  F5", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(Span::styled(
                LOADING_LABEL,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ))
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let title = match self.submission.state() {
            Submission::Ready(suggestions) => format!(" Suggestions ({}) ", suggestions.len()),
            _ => " Suggestions ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style(self.focus == Focus::Results));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.submission.is_loading() {
            let line = Line::from(vec![
                Span::styled(self.spinner(), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::raw(LOADING_MESSAGE),
            ]);
            frame.render_widget(Paragraph::new(line), inner);
            return;
        }

        if let Some(notice) = self.submission.notice() {
            let color = match notice.kind {
                NoticeKind::Validation => Color::Yellow,
                NoticeKind::Info => Color::Cyan,
                NoticeKind::Error => Color::Red,
            };
            let paragraph = Paragraph::new(notice.text)
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
            return;
        }

        let suggestions = self.submission.suggestions();
        if suggestions.is_empty() {
            let hint = Paragraph::new("Fill in both fields, then press F5 to get suggestions.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, inner);
            return;
        }

        let layout = build_cards(suggestions, self.selected, inner.width);
        let offset = self
            .selected
            .and_then(|index| layout.card_span(index))
            .map(|(start, end)| end.saturating_sub(inner.height as usize).min(start))
            .unwrap_or(0);

        let paragraph = Paragraph::new(layout.lines).scroll((offset as u16, 0));
        frame.render_widget(paragraph, inner);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Green),
            )),
            None => {
                let hints = match self.focus {
                    Focus::Content | Focus::Links => {
                        "Tab: next pane | F5/Ctrl+G: generate | Ctrl+C: quit"
                    }
                    Focus::Results => {
                        "j/k: select | y: copy link | o/Enter: open link | Tab: next pane | q: quit"
                    }
                };
                Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
