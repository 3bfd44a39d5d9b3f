//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: No error information is lost in conversion from core errors

use branchblog_core::BlogError;
use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// | Kind | Variant | Meaning |
/// |------|---------|---------|
/// | `validation` | `Validation` | Bad title/content/tags |
/// | `not_found` | `NotFound` | Unknown post id |
/// | `corrupt_state` | `CorruptState` | Store invariant violated |
/// | `post_deleted` | `PostDeleted` | Mutation of a soft-deleted post refused |
/// | `invalid_command` | `InvalidCommand` | Command could not be decoded |
/// | `internal` | `Internal` | Unexpected output shape (bug) |
///
/// The transport layer maps [`Error::kind`] to its own status codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Malformed input
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// Post not found
    #[error("post not found: {id}")]
    NotFound { id: u64 },

    /// Corrupt store state
    #[error("corrupt state: {reason}")]
    CorruptState { reason: String },

    /// Post is soft-deleted
    #[error("post is deleted: {id}")]
    PostDeleted { id: u64 },

    /// Command could not be parsed
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },

    /// Internal error
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// Stable, machine readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "validation",
            Error::NotFound { .. } => "not_found",
            Error::CorruptState { .. } => "corrupt_state",
            Error::PostDeleted { .. } => "post_deleted",
            Error::InvalidCommand { .. } => "invalid_command",
            Error::Internal { .. } => "internal",
        }
    }
}

impl From<BlogError> for Error {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::Validation { reason } => Error::Validation { reason },
            BlogError::NotFound { id } => Error::NotFound { id: id.as_u64() },
            BlogError::CorruptState { reason } => Error::CorruptState { reason },
            BlogError::PostDeleted { id } => Error::PostDeleted { id: id.as_u64() },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidCommand {
            reason: err.to_string(),
        }
    }
}
