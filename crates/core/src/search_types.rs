//! Search request and response types

use crate::post::Post;
use serde::{Deserialize, Serialize};

/// Text and tag filter over live posts
///
/// Blank filters are treated as absent; with both absent a search returns
/// every live post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-insensitive substring matched against title, content and tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Case-insensitive exact tag membership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl SearchRequest {
    /// Match everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Text query only
    pub fn text(query: impl Into<String>) -> Self {
        SearchRequest {
            query: Some(query.into()),
            tag: None,
        }
    }

    /// Builder: add a tag filter
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Lowercased query, `None` if blank
    ///
    /// Surrounding whitespace is kept: it is part of the substring matched.
    pub fn normalized_query(&self) -> Option<String> {
        let query = self.query.as_deref()?;
        if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        }
    }

    /// Trimmed, lowercased tag, `None` if blank
    pub fn normalized_tag(&self) -> Option<String> {
        let tag = self.tag.as_deref()?.trim();
        if tag.is_empty() {
            None
        } else {
            Some(tag.to_lowercase())
        }
    }
}

/// Matching posts in ascending id order, with their count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches
    pub hits: Vec<Post>,
    /// `hits.len()`
    pub count: usize,
}

impl SearchResponse {
    /// Wrap hits and record their count
    pub fn new(hits: Vec<Post>) -> Self {
        let count = hits.len();
        SearchResponse { hits, count }
    }
}
