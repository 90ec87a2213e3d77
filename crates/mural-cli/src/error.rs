use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] mural_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No feedback text provided")]
    EmptyFeedbackText,
    #[error("Entry id must be an integer, got '{0}'")]
    InvalidEntryId(String),
}
