//! OSC 52 clipboard backend
//!
//! The terminal emulator receives the base64 payload and sets its own
//! clipboard, so this works on remote sessions without a display server.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stdout(), text)
}

pub(crate) fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    out.flush().map_err(|_| ClipboardError::WriteError)
}

pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
