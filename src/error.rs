//! Error types for the tabular learner crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is out of bounds (rows and columns must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("opponent '{opponent}' proposed a rejected move at ({row}, {col})")]
    RejectedMove {
        row: usize,
        col: usize,
        opponent: String,
    },

    #[error("non-terminal state '{state}' has no available actions")]
    NoAvailableActions { state: String },

    #[error("invalid state key '{key}': {reason}")]
    InvalidStateKey { key: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid opponent '{input}'. Expected one of: {expected}")]
    InvalidOpponent { input: String, expected: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
