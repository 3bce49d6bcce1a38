//! Local review of model suggestions
//!
//! The model is told to quote the page and pick from the submitted links,
//! but nothing forces it to. Review flags each suggestion; none are dropped.

use serde::Serialize;

use super::parser::Suggestion;
use crate::links::is_listed;

/// A suggestion together with the outcome of the local checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedSuggestion {
    #[serde(flatten)]
    pub suggestion: Suggestion,
    /// Anchor text occurs verbatim in the context
    pub anchor_in_context: bool,
    /// Link is one of the submitted candidate links
    pub link_listed: bool,
}

impl ReviewedSuggestion {
    pub fn review(suggestion: Suggestion, links: &[String]) -> Self {
        let anchor_in_context = !suggestion.anchor_text.is_empty()
            && suggestion.context.contains(&suggestion.anchor_text);
        let link_listed = is_listed(&suggestion.link, links);

        Self {
            suggestion,
            anchor_in_context,
            link_listed,
        }
    }

    /// Both checks passed
    pub fn is_clean(&self) -> bool {
        self.anchor_in_context && self.link_listed
    }

    /// Human-readable descriptions of the failed checks
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if !self.anchor_in_context {
            warnings.push("Anchor text not found verbatim in context");
        }
        if !self.link_listed {
            warnings.push("Link is not in your list");
        }
        warnings
    }
}

/// Review every suggestion against the submitted links, keeping order
pub fn review_suggestions(suggestions: Vec<Suggestion>, links: &[String]) -> Vec<ReviewedSuggestion> {
    suggestions
        .into_iter()
        .map(|s| ReviewedSuggestion::review(s, links))
        .collect()
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod review_tests;
