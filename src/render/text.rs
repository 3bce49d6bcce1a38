//! Plain-text output

use crate::ai::suggestion::ReviewedSuggestion;
use crate::highlight::split_context;

/// Numbered list; anchor occurrences are wrapped in `**`
///
/// ```text
/// 1. Sourdough needs a **lively starter**.
///    Link to: https://example.com/starter-guide
/// ```
pub fn render_text(suggestions: &[ReviewedSuggestion]) -> String {
    let mut out = String::new();

    for (i, reviewed) in suggestions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let suggestion = &reviewed.suggestion;

        let mut context = String::new();
        for segment in split_context(&suggestion.context, &suggestion.anchor_text) {
            if segment.emphasized {
                context.push_str("**");
                context.push_str(segment.text);
                context.push_str("**");
            } else {
                context.push_str(segment.text);
            }
        }

        let marker = format!("{}. ", i + 1);
        let indent = " ".repeat(marker.len());
        out.push_str(&marker);
        // Continuation lines of a multi-line context line up under the first
        out.push_str(&context.replace('\n', &format!("\n{indent}")));
        out.push('\n');
        out.push_str(&format!("{indent}Link to: {}\n", suggestion.link));
        for warning in reviewed.warnings() {
            out.push_str(&format!("{indent}! {warning}\n"));
        }
    }

    out
}
