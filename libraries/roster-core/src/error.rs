/// Core error types for the roster
use crate::types::UserId;
use crate::validation::FieldErrors;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for the roster
///
/// Every variant is an expected, caller-recoverable condition. None of them
/// leave the store partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Malformed argument, e.g. pagination out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more payload fields failed validation
    #[error("Validation failed: {0}")]
    InvalidFields(FieldErrors),

    /// No user with the given id
    #[error("User not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: UserId,
    },

    /// Another user already owns this email (case-insensitive)
    #[error("Email already in use: {email}")]
    Conflict {
        /// The email that collided, as supplied by the caller
        email: String,
    },
}

impl RosterError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }

    /// Create a conflict error
    pub fn conflict(email: impl Into<String>) -> Self {
        Self::Conflict {
            email: email.into(),
        }
    }

    /// Whether this error stems from bad caller input (pagination or fields)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidFields(_))
    }
}

impl From<FieldErrors> for RosterError {
    fn from(errors: FieldErrors) -> Self {
        Self::InvalidFields(errors)
    }
}
