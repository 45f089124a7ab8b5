//! Error types for seat activity generation

use thiserror::Error;

/// Errors raised while validating seat templates and configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatsError {
    #[error("Template data must include a 'seats' array")]
    MissingSeats,

    #[error("Seat {index} is not an object")]
    MalformedSeat { index: usize },

    #[error("Seat {index} has no 'assignee.login' string")]
    MissingLogin { index: usize },

    #[error("Seat {index} has an invalid 'assignee.login': {login:?}")]
    InvalidLogin { index: usize, login: String },

    #[error("Seat for '{login}' has an unparseable last_activity_at: {value}")]
    InvalidTimestamp { login: String, value: String },

    #[error("Editor pool must contain at least one editor identifier")]
    EmptyEditorPool,

    #[error("Unrecognized usage pattern '{0}' (expected heavy, heavy-but-siloed, moderate, light)")]
    UnrecognizedUsagePattern(String),
}
