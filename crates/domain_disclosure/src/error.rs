//! Disclosure domain errors

use thiserror::Error;

/// Errors that can occur in the disclosure domain
#[derive(Debug, Error)]
pub enum DisclosureError {
    #[error("Cannot {operation} while questionnaire is {state}")]
    InvalidStateTransition { operation: String, state: String },

    #[error("Navigation unavailable: {0}")]
    NavigationUnavailable(String),

    #[error("Invalid question bank: {0}")]
    InvalidQuestionBank(String),

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("Failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse question bank: {0}")]
    Json(#[from] serde_json::Error),
}

impl DisclosureError {
    pub fn invalid_state(operation: impl Into<String>, state: impl std::fmt::Display) -> Self {
        DisclosureError::InvalidStateTransition {
            operation: operation.into(),
            state: state.to_string(),
        }
    }

    pub fn invalid_bank(message: impl Into<String>) -> Self {
        DisclosureError::InvalidQuestionBank(message.into())
    }
}
