//! Error types for palavras-core.

use thiserror::Error;

/// Result type alias using BackupError.
pub type Result<T> = std::result::Result<T, BackupError>;

/// Errors that can occur while reading a backup document.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("backup root must be a JSON object")]
    NotAnObject,

    #[error("backup is missing a \"words\" array")]
    MissingWords,

    #[error("unsupported backup version {0}")]
    UnsupportedVersion(i64),

    #[error("backup version must be an integer, got {0}")]
    InvalidVersion(String),

    #[error("word {index} is not an object")]
    InvalidWord { index: usize },

    #[error("word {index} has an empty or missing \"{field}\"")]
    MissingField { index: usize, field: &'static str },

    #[error("duplicate word id {id} at index {index}")]
    DuplicateId { id: String, index: usize },
}

/// Errors raised when word fields fail validation before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Errors raised by a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("answer must not be empty")]
    EmptyAnswer,

    #[error("question already answered")]
    AlreadyAnswered,

    #[error("quiz is finished")]
    Finished,
}
