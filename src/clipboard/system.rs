//! System clipboard backend (arboard)

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Fails with `SystemUnavailable` when no display server or clipboard
/// service can be reached.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_returns_result() {
        // Availability depends on the environment
        let result = copy("https://example.com/a");
        assert!(
            result.is_ok()
                || matches!(
                    result,
                    Err(ClipboardError::SystemUnavailable) | Err(ClipboardError::WriteError)
                )
        );
    }
}
