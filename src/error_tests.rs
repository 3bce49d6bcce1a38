//! Tests for LinkwiseError

use super::*;

#[test]
fn test_read_input_error_display() {
    let error = LinkwiseError::ReadInput {
        path: PathBuf::from("/tmp/page.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let msg = error.to_string();
    assert!(msg.contains("/tmp/page.txt"));
    assert!(msg.contains("no such file"));
}

#[test]
fn test_stdin_twice_display() {
    let msg = LinkwiseError::StdinTwice.to_string();
    assert!(msg.contains("--content"));
    assert!(msg.contains("--links"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err = LinkwiseError::from(io_err);
    assert!(matches!(err, LinkwiseError::Io(_)));
    assert!(err.to_string().contains("pipe closed"));
}

#[test]
fn test_serialize_error_from_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = LinkwiseError::from(serde_err);
    assert!(matches!(err, LinkwiseError::Serialize(_)));
}
