//! Copying suggestion links to the clipboard

pub mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
