//! Suggestion cards for the results pane

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::wrap::wrap_styled;
use crate::ai::suggestion::ReviewedSuggestion;
use crate::highlight::split_context;

const SELECTED_MARKER: &str = "▌ ";
const MARKER_WIDTH: u16 = 2;

/// Rendered cards plus the first line index of each card
#[derive(Debug, Default)]
pub struct CardLayout {
    pub lines: Vec<Line<'static>>,
    pub card_starts: Vec<usize>,
}

impl CardLayout {
    /// Line range occupied by card `index`, excluding the separator
    pub fn card_span(&self, index: usize) -> Option<(usize, usize)> {
        let start = *self.card_starts.get(index)?;
        let end = match self.card_starts.get(index + 1) {
            Some(next) => next - 1,
            None => self.lines.len(),
        };
        Some((start, end))
    }
}

pub fn emphasis_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

/// Build one card per suggestion, in order
///
/// Each card shows the context with every anchor occurrence emphasized,
/// a `Link to:` line, and one warning line per failed review check.
pub fn build_cards(
    suggestions: &[ReviewedSuggestion],
    selected: Option<usize>,
    width: u16,
) -> CardLayout {
    let inner_width = width.saturating_sub(MARKER_WIDTH) as usize;
    let mut layout = CardLayout::default();

    for (i, reviewed) in suggestions.iter().enumerate() {
        if i > 0 {
            layout.lines.push(Line::from(""));
        }
        layout.card_starts.push(layout.lines.len());

        let is_selected = selected == Some(i);
        let suggestion = &reviewed.suggestion;

        let segments = split_context(&suggestion.context, &suggestion.anchor_text);
        let context_pieces: Vec<(&str, Style)> = segments
            .iter()
            .map(|segment| {
                let style = if segment.emphasized {
                    emphasis_style()
                } else {
                    Style::default()
                };
                (segment.text, style)
            })
            .collect();

        let mut body = wrap_styled(&context_pieces, inner_width);
        body.extend(wrap_styled(
            &[
                ("Link to: ", Style::default().fg(Color::DarkGray)),
                (suggestion.link.as_str(), link_style()),
            ],
            inner_width,
        ));
        for warning in reviewed.warnings() {
            let text = format!("⚠ {}", warning);
            body.extend(wrap_styled(
                &[(text.as_str(), Style::default().fg(Color::Yellow))],
                inner_width,
            ));
        }

        for line in body {
            layout.lines.push(with_marker(line, is_selected));
        }
    }

    layout
}

fn with_marker(line: Line<'static>, is_selected: bool) -> Line<'static> {
    let marker = if is_selected {
        Span::styled(SELECTED_MARKER, Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    };

    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(marker);
    spans.extend(line.spans);
    Line::from(spans)
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod cards_tests;
