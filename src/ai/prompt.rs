//! Prompt template and structured-output schema
//!
//! Both inputs are interpolated verbatim. The schema is declared to the
//! model; replies are still parsed defensively by the suggestion parser.

use serde_json::{Value, json};

const INSTRUCTIONS: &str = "You are an SEO expert specializing in contextual internal linking.
Analyze the following webpage content and the list of available internal links.
Your task is to identify the best opportunities to add internal links to the content.

- The anchor text must be an exact phrase from the content.
- The link must be from the provided list of available links.
- Choose placements that are natural and provide value to the reader.
- For each suggestion, provide the exact anchor text, the corresponding link, and the surrounding sentence or short paragraph for context.";

/// Build the instruction text sent to the model
///
/// Callers must reject blank inputs before calling this.
pub fn build_prompt(page_content: &str, available_links: &str) -> String {
    format!(
        "{INSTRUCTIONS}\n\nWebpage Content:\n---\n{page_content}\n---\n\nAvailable Links (one per line):\n---\n{available_links}\n---"
    )
}

/// Names of the fields every suggestion item must carry
pub const SUGGESTION_FIELDS: [&str; 3] = ["anchorText", "link", "context"];

/// Response schema in Gemini's OpenAPI subset
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestions": {
                "type": "ARRAY",
                "description": "A list of link insertion suggestions.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "anchorText": {
                            "type": "STRING",
                            "description": "The exact phrase from the content to be used as anchor text."
                        },
                        "link": {
                            "type": "STRING",
                            "description": "The internal link to be placed from the available list."
                        },
                        "context": {
                            "type": "STRING",
                            "description": "The sentence or paragraph where the anchor text is found."
                        }
                    },
                    "required": SUGGESTION_FIELDS
                }
            }
        },
        "required": ["suggestions"]
    })
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
