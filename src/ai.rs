//! Suggestion pipeline backed by the Gemini API
//!
//! Prompt assembly, the HTTP client, reply parsing and the background
//! worker that keeps the UI responsive while a request is in flight.

pub mod prompt;
pub mod provider;
pub mod suggestion;
pub mod worker;
