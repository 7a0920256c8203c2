//!
//! localaccount: a small local account system.
//! This library provides user registration, login, profile editing and session tracking
//! on top of a pluggable string key-value store.
//!
//! ## Core Concepts
//!
//! * **Storage (`backend::Storage`)**: The key-value port everything persists through. Values are
//!   JSON strings under fixed keys (see [`constants`]).
//! * **UserStore (`user::UserStore`)**: The durable collection of [`user::UserRecord`]s, keyed by nickname.
//!   Every mutation is a full read-modify-write of the collection.
//! * **SessionManager (`user::SessionManager`)**: At most one active [`user::SessionRecord`], naming
//!   the logged-in nickname.
//! * **Accounts (`accounts::Accounts`)**: The register / login / profile / logout flows built on
//!   the two stores.
//!
//! Malformed persisted content never surfaces as an error: it reads as an empty collection or an
//! absent session. Only failures of the storage itself are returned.

pub mod accounts;
pub mod backend;
pub mod clock;
pub mod codec;
pub mod constants;
pub mod user;

pub use accounts::Accounts;
pub use clock::{Clock, SystemClock};

#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;

/// Result type used throughout the localaccount library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the localaccount library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured storage errors from the backend module
    #[error(transparent)]
    Storage(backend::StorageError),

    /// Structured account errors from the user module
    #[error(transparent)]
    User(user::UserError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Storage(_) => "backend",
            Error::User(_) => "user",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a user or session was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is storage-related.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }
}
