use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed notification shown when parameter validation fails. The session
/// terminates after it is surfaced; there is no retry.
pub const PARAMETER_NOTIFICATION: &str =
    "One of the parameters was not correctly specified. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Transport,
    Protocol,
    Internal,
}

#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct SessionException {
    pub code: ErrorCode,
    pub message: String,
}

impl SessionException {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
