//! Error types for the user system
use thiserror::Error;

/// Rejections raised by the account flows.
///
/// Store-level lookups never produce these: a missing nickname there is `None` or `false`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("Nickname and password are required")]
    MissingCredentials,

    #[error("Nickname already taken: {nickname}")]
    NicknameTaken { nickname: String },

    #[error("Invalid nickname or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("User not found: {nickname}")]
    UserNotFound { nickname: String },
}

impl UserError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::UserNotFound { .. })
    }

    /// Check if this error indicates a nickname conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, UserError::NicknameTaken { .. })
    }

    /// Check if this error is about who the caller is.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            UserError::InvalidCredentials | UserError::NotLoggedIn
        )
    }

    /// Check if this error is an input presence failure.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, UserError::MissingCredentials)
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
