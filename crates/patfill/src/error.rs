//! Error types for pattern expansion.

use patfill_spec::{ErrorCode, ValidationError};
use thiserror::Error;

/// Result type for expansion operations.
pub type ExpandResult<T> = Result<T, ExpandError>;

/// Errors that can occur during expansion. Both are fatal to the call; no
/// partial output is returned.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// Options failed validation before any substitution ran.
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] ValidationError),

    /// The pattern used a token whose alphabet is empty.
    #[error("token set for '{token}' is empty")]
    EmptyAlphabet {
        /// The token that was encountered.
        token: char,
    },
}

impl ExpandError {
    /// Creates an empty alphabet error.
    pub fn empty_alphabet(token: char) -> Self {
        Self::EmptyAlphabet { token }
    }

    /// Returns the error code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ExpandError::InvalidOptions(err) => err.code,
            ExpandError::EmptyAlphabet { .. } => ErrorCode::EmptyAlphabet,
        }
    }

    /// Returns the error code string (e.g., "E002").
    pub fn code(&self) -> &'static str {
        self.error_code().code()
    }
}
