//! Suggestion parsing for model replies
//!
//! The model is asked for a JSON document of the form:
//! ```text
//! {"suggestions": [{"anchorText": "...", "link": "...", "context": "..."}]}
//! ```
//! Anything else (truncated JSON, a missing `suggestions` field, items
//! missing a field) is a contract violation.

use serde::{Deserialize, Serialize};

use crate::ai::provider::AiError;

/// One proposed link insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Exact phrase from the page content to turn into a link
    pub anchor_text: String,
    /// Target URL, expected to come from the submitted list
    pub link: String,
    /// Sentence or short passage containing the anchor text
    pub context: String,
}

#[derive(Debug, Deserialize)]
struct SuggestionReply {
    suggestions: Vec<Suggestion>,
}

/// Parse suggestions from the model's reply text
///
/// Order is preserved. An empty list is a valid, if vacuous, answer.
pub fn parse_suggestions(reply: &str) -> Result<Vec<Suggestion>, AiError> {
    let json = strip_code_fence(reply.trim());

    serde_json::from_str::<SuggestionReply>(json)
        .map(|reply| reply.suggestions)
        .map_err(|e| AiError::Parse(format!("Reply is not a valid suggestion list: {e}")))
}

/// Remove a surrounding Markdown code fence, if the model added one
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
