//! Word wrapping for styled text, measured in terminal cells

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap styled pieces into lines no wider than `width` cells
///
/// Breaks at spaces and at embedded newlines, never at a style change, so a
/// word whose middle is emphasized stays on one line. A word wider than the
/// whole line is split at character boundaries. Always yields at least one
/// line.
pub(crate) fn wrap_styled(pieces: &[(&str, Style)], width: usize) -> Vec<Line<'static>> {
    let mut wrapper = Wrapper::new(width.max(1));

    for (text, style) in pieces {
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                wrapper.flush_word();
                wrapper.break_line();
            }
            for chunk in segment.split_inclusive(' ') {
                wrapper.pending.push((chunk.to_string(), *style));
                if chunk.ends_with(' ') {
                    wrapper.flush_word();
                }
            }
        }
    }

    wrapper.flush_word();
    wrapper.finish()
}

struct Wrapper {
    width: usize,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    used: usize,
    /// Styled runs of the word being collected, up to and including its space
    pending: Vec<(String, Style)>,
}

impl Wrapper {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: Vec::new(),
            used: 0,
            pending: Vec::new(),
        }
    }

    /// Place the pending word, breaking the line first if it does not fit
    fn flush_word(&mut self) {
        let runs = std::mem::take(&mut self.pending);
        if runs.is_empty() {
            return;
        }

        let total: usize = runs.iter().map(|(text, _)| text.width()).sum();
        let trailing = runs
            .last()
            .map(|(text, _)| text.len() - text.trim_end_matches(' ').len())
            .unwrap_or(0);
        // Trailing space may hang past the edge
        let visible = total - trailing;

        if self.used > 0 && self.used + visible > self.width {
            self.break_line();
        }

        if visible <= self.width {
            for (text, style) in &runs {
                self.push_str(text, *style);
            }
            self.used += total;
            return;
        }

        for (text, style) in &runs {
            for ch in text.chars() {
                let cells = ch.width().unwrap_or(0);
                if self.used > 0 && self.used + cells > self.width {
                    self.break_line();
                }
                let mut buf = [0u8; 4];
                self.push_str(ch.encode_utf8(&mut buf), *style);
                self.used += cells;
            }
        }
    }

    fn push_str(&mut self, text: &str, style: Style) {
        if let Some(last) = self.current.last_mut()
            && last.style == style
        {
            last.content.to_mut().push_str(text);
            return;
        }
        self.current.push(Span::styled(text.to_string(), style));
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
        self.used = 0;
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.break_line();
        }
        self.lines
    }
}
