//! Error types for the quiz crate.

use thiserror::Error;

/// Errors emitted while loading or validating a question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question bank could not be parsed: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("question bank is empty")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(u32),
    #[error("question {id} marks option {index} as correct, expected 0..=3")]
    AnswerOutOfRange { id: u32, index: u8 },
}

/// Contract violations rejected by `QuizSession`.
///
/// Intents whose precondition simply does not hold (answering after the
/// session finished, submitting in practice mode...) are not errors; they
/// come back as `Transition::Ignored`.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("option index {index} is out of range, expected 0..=3")]
    OptionOutOfRange { index: u8 },
    #[error("question {0} is not part of the current working set")]
    NotInWorkingSet(u32),
}

/// Errors emitted while producing or delivering an export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("browser download failed: {0}")]
    Download(String),
}
