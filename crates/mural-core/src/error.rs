//! Error types for mural-core

use thiserror::Error;

/// Result type alias using mural-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mural-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Feedback body was empty after trimming
    #[error("Please enter your feedback")]
    EmptyFeedback,

    /// Feedback body was shorter than the minimum after trimming
    #[error("Feedback must be at least {minimum} characters long (got {length})")]
    FeedbackTooShort {
        /// Trimmed length of the submitted body, in characters
        length: usize,
        /// Required minimum length
        minimum: usize,
    },

    /// Persisted slot payload could not be decoded
    #[error("Stored feedback data is corrupt: {0}")]
    StorageCorrupt(String),

    /// Submission backend rejected the candidate entry
    #[error("Submission failed: {0}")]
    Submission(String),

    /// A submission is already awaiting its backend call
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
