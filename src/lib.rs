//! linkwise: contextual internal-link suggestions from Gemini
//!
//! The library holds everything the binary wires together: the Gemini
//! client and worker, the submission state machine, highlighting and the
//! renderers for the terminal UI and print mode.

pub mod ai;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod headless;
pub mod highlight;
pub mod links;
pub mod logging;
pub mod render;
pub mod submission;

#[cfg(test)]
mod test_utils;
