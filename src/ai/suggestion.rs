//! Suggestion module for the link assistant
//!
//! This module provides the suggestion type, reply parsing, and local review.

pub mod parser;
pub mod review;

// Re-export main types
pub use parser::{Suggestion, parse_suggestions};
pub use review::{ReviewedSuggestion, review_suggestions};
