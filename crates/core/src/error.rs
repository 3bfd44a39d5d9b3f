//! Error types for the branching blog core
//!
//! Every fallible operation in core, engine and search returns [`BlogResult`].
//! Errors are raised at the point of detection and never retried: the core is
//! pure in-memory logic and has no transient failure modes.

use crate::types::PostId;
use thiserror::Error;

/// Result type alias for blog operations
pub type BlogResult<T> = std::result::Result<T, BlogError>;

/// Error taxonomy for the blog core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogError {
    /// Malformed input (empty title/content, limit exceeded, bad config)
    #[error("validation failed: {reason}")]
    Validation {
        /// Human readable reason
        reason: String,
    },

    /// Id out of range or unknown
    #[error("post not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: PostId,
    },

    /// Tree traversal invariant violated
    #[error("corrupt state: {reason}")]
    CorruptState {
        /// What was violated
        reason: String,
    },

    /// Mutation rejected because the post is soft-deleted
    #[error("post is deleted: {id}")]
    PostDeleted {
        /// The deleted post
        id: PostId,
    },
}

impl BlogError {
    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        BlogError::Validation {
            reason: reason.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(id: impl Into<PostId>) -> Self {
        BlogError::NotFound { id: id.into() }
    }

    /// Create a corrupt-state error
    pub fn corrupt(reason: impl Into<String>) -> Self {
        BlogError::CorruptState {
            reason: reason.into(),
        }
    }

    /// Create a deleted-post error
    pub fn deleted(id: impl Into<PostId>) -> Self {
        BlogError::PostDeleted { id: id.into() }
    }

    /// True for `Validation`
    pub fn is_validation(&self) -> bool {
        matches!(self, BlogError::Validation { .. })
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::NotFound { .. })
    }

    /// True for `CorruptState`
    pub fn is_corrupt(&self) -> bool {
        matches!(self, BlogError::CorruptState { .. })
    }

    /// True for `PostDeleted`
    pub fn is_deleted(&self) -> bool {
        matches!(self, BlogError::PostDeleted { .. })
    }
}
