//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;

use roster_model::InvalidArgument;
use thiserror::Error;

/// Failure talking to the key-value backend.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend.
    #[error("Invalid storage key `{key}`")]
    InvalidKey { key: String },

    /// Serialization error.
    #[error("Failed to serialize roster data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend refused the operation for a reason of its own.
    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidKey { key } => {
                format!("The storage key '{key}' cannot be used as a file name.")
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the candidate list.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Unavailable { reason } => {
                format!("Candidate storage is unavailable: {reason}")
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidKey { .. } => None,
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different data directory.".into())
            }
            Self::Unavailable { .. } => {
                Some("Your changes are kept for this session; retry saving later.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Failure of a roster mutation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected before the roster was touched.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The roster was updated in memory but could not be written out.
    #[error("candidate kept in memory but not saved: {0}")]
    Persistence(#[from] PersistenceError),
}
