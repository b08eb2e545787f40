//! I/O error types.

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An event line could not be parsed.
    #[error("malformed event record at line {line}: {source}")]
    MalformedEvent {
        /// 1-based line number in the event file.
        line: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
