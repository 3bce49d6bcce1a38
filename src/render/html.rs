//! HTML fragment output

use crate::ai::suggestion::ReviewedSuggestion;
use crate::highlight::split_context;
use crate::links::validate_link;

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// One `<article>` per suggestion, joined by newlines
pub fn render_html(suggestions: &[ReviewedSuggestion]) -> String {
    suggestions
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(reviewed: &ReviewedSuggestion) -> String {
    let suggestion = &reviewed.suggestion;

    let mut paragraph = String::new();
    for segment in split_context(&suggestion.context, &suggestion.anchor_text) {
        if segment.emphasized {
            paragraph.push_str("<strong>");
            paragraph.push_str(&escape_html(segment.text));
            paragraph.push_str("</strong>");
        } else {
            paragraph.push_str(&escape_html(segment.text));
        }
    }

    let link = escape_html(&suggestion.link);
    // Non-web schemes are shown but never made clickable
    let target = if validate_link(&suggestion.link).is_ok() {
        format!(r#"<a href="{link}" target="_blank" rel="noopener noreferrer">{link}</a>"#)
    } else {
        format!(r#"<span class="link">{link}</span>"#)
    };

    let mut card = format!(
        r#"<article class="suggestion-card"><p>{paragraph}</p><div class="link-display"><span>Link to:</span>{target}</div>"#
    );

    let warnings = reviewed.warnings();
    if !warnings.is_empty() {
        card.push_str(r#"<ul class="warnings">"#);
        for warning in warnings {
            card.push_str("<li>");
            card.push_str(&escape_html(warning));
            card.push_str("</li>");
        }
        card.push_str("</ul>");
    }

    card.push_str("</article>");
    card
}
