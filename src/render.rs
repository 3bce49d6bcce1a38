//! Suggestion rendering
//!
//! `cards` draws the TUI result list; `html`, `text` and JSON serve print mode.

pub mod cards;
pub mod html;
pub mod text;
mod wrap;

use crate::ai::suggestion::ReviewedSuggestion;

/// Output format for print mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Render reviewed suggestions in the requested format
pub fn render(
    format: OutputFormat,
    suggestions: &[ReviewedSuggestion],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text::render_text(suggestions)),
        OutputFormat::Html => Ok(html::render_html(suggestions)),
        OutputFormat::Json => serde_json::to_string_pretty(suggestions),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
