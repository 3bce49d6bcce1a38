use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command-line layer and print mode
#[derive(Debug, Error)]
pub enum LinkwiseError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Only one of --content and --links can read from standard input")]
    StdinTwice,

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Failed to serialize suggestions: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
