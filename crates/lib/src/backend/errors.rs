//! Storage error types for the localaccount backend.
//!
//! These cover failures of the store itself. Malformed *records* are not storage errors;
//! they are absorbed by the layer that decodes them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// File I/O error.
    #[error("File I/O error on {}", .path.display())]
    FileIo {
        /// The file being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization of the backing map failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The backing file exists but is not a JSON object of string values.
    #[error("Corrupt storage file {}", .path.display())]
    Corrupt {
        /// The file that failed to parse
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("Storage lock poisoned: {reason}")]
    LockPoisoned {
        /// Which lock was poisoned
        reason: String,
    },
}

impl StorageError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            StorageError::FileIo { .. } | StorageError::SerializationFailed { .. }
        )
    }

    /// Check if this error indicates the backing data could not be parsed.
    pub fn is_corruption(&self) -> bool {
        matches!(self, StorageError::Corrupt { .. })
    }

    /// Get the file path if this error is about a specific file.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StorageError::FileIo { path, .. } | StorageError::Corrupt { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
