//! Error types for the session subsystem.

use thiserror::Error;

/// Errors that can occur while resolving or persisting a session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// Email or password did not match the role's demo account.
    ///
    /// The message does not say which of email, password or role was wrong.
    #[error("Invalid credentials or role mismatch")]
    InvalidCredentials,

    /// A login form field was left blank
    #[error("Please fill in all fields")]
    MissingField { field: &'static str },

    /// The role has no demo account configured
    #[error("No demo account configured for role `{role}`")]
    UnknownAccount { role: String },

    /// The backing store failed
    #[error("Session store error: {message}")]
    Store { message: String },

    /// A persisted session entry could not be decoded
    #[error("Malformed session entry: {message}")]
    MalformedSession { message: String },
}

impl SessionError {
    /// Returns true if the message is meant to be shown to the person logging
    /// in, as opposed to an operator.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidCredentials | SessionError::MissingField { .. }
        )
    }
}

impl From<rusqlite::Error> for SessionError {
    fn from(err: rusqlite::Error) -> Self {
        SessionError::Store {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::MalformedSession {
            message: err.to_string(),
        }
    }
}
