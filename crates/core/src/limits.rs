//! Size limits for post fields
//!
//! Limits are enforced by the post store on create, fork and update.
//! Violations surface as `BlogError::Validation`.

use crate::error::BlogError;
use crate::tags::TagSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size limits for titles, content and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum title length in bytes (default: 512)
    pub max_title_bytes: usize,

    /// Maximum content length in bytes (default: 1MB)
    pub max_content_bytes: usize,

    /// Maximum number of tags per post (default: 64)
    pub max_tags: usize,

    /// Maximum single tag length in bytes (default: 64)
    pub max_tag_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_title_bytes: 512,
            max_content_bytes: 1024 * 1024, // 1MB
            max_tags: 64,
            max_tag_bytes: 64,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_title_bytes: 16,
            max_content_bytes: 64,
            max_tags: 3,
            max_tag_bytes: 8,
        }
    }

    /// Validate a title: non-blank and within `max_title_bytes`
    pub fn validate_title(&self, title: &str) -> Result<(), LimitError> {
        validate_text("title", title, self.max_title_bytes)
    }

    /// Validate content: non-blank and within `max_content_bytes`
    pub fn validate_content(&self, content: &str) -> Result<(), LimitError> {
        validate_text("content", content, self.max_content_bytes)
    }

    /// Validate tag count and per-tag length
    pub fn validate_tags(&self, tags: &TagSet) -> Result<(), LimitError> {
        if tags.len() > self.max_tags {
            return Err(LimitError::TooManyTags {
                actual: tags.len(),
                max: self.max_tags,
            });
        }
        if let Some(tag) = tags.iter().find(|t| t.len() > self.max_tag_bytes) {
            return Err(LimitError::TagTooLong {
                tag: tag.to_string(),
                max: self.max_tag_bytes,
            });
        }
        Ok(())
    }

    /// Default title for a fork: `base` followed by `suffix`
    ///
    /// `base` is cut on a char boundary so the result fits
    /// `max_title_bytes`; the suffix is never cut.
    pub fn fork_title(&self, base: &str, suffix: &str) -> String {
        let budget = self.max_title_bytes.saturating_sub(suffix.len());
        let mut end = base.len().min(budget);
        while !base.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}{}", &base[..end], suffix)
    }
}

fn validate_text(field: &'static str, text: &str, max: usize) -> Result<(), LimitError> {
    if text.trim().is_empty() {
        return Err(LimitError::Empty { field });
    }
    if text.len() > max {
        return Err(LimitError::TooLong {
            field,
            actual: text.len(),
            max,
        });
    }
    Ok(())
}

/// Limit validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Field is empty after trimming
    #[error("{field} must not be empty")]
    Empty {
        /// Field name
        field: &'static str,
    },

    /// Field exceeds its byte limit
    #[error("{field} too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Actual length
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Too many tags
    #[error("too many tags: {actual} exceeds maximum {max}")]
    TooManyTags {
        /// Actual count
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A single tag is too long
    #[error("tag '{tag}' exceeds maximum {max} bytes")]
    TagTooLong {
        /// Offending tag
        tag: String,
        /// Maximum allowed
        max: usize,
    },
}

impl From<LimitError> for BlogError {
    fn from(e: LimitError) -> Self {
        BlogError::validation(e.to_string())
    }
}
