//! Post entity and request types
//!
//! A post is either a root ("publish new", `parent == None`) or a fork of an
//! earlier post. Posts are never physically removed; `deleted` is a flag.

use crate::media::MediaBundle;
use crate::tags::TagSet;
use crate::timestamp::Timestamp;
use crate::types::PostId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A blog post and its position in the fork forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Sequential id, equal to the post's index in the store
    pub id: PostId,
    /// Title
    pub title: String,
    /// Body text
    pub content: String,
    /// Tags, user-supplied and media-derived alike
    pub tags: TagSet,
    /// Like counter, never decremented
    pub likes: u64,
    /// Creation time
    pub created_at: Timestamp,
    /// Post this one was forked from
    pub parent: Option<PostId>,
    /// Direct forks in creation order
    pub forks: Vec<PostId>,
    /// Soft-delete marker
    pub deleted: bool,
    /// Attached media, shared with forks until written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Arc<MediaBundle>>,
}

impl Post {
    /// True if this post was not forked from anything
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// True if this post has at least one fork
    pub fn has_forks(&self) -> bool {
        !self.forks.is_empty()
    }

    /// Mutable access to the media bundle
    ///
    /// If the bundle is shared with another post it is cloned first, so the
    /// other post never observes the write.
    pub fn media_mut(&mut self) -> Option<&mut MediaBundle> {
        self.media.as_mut().map(Arc::make_mut)
    }

    /// True when this post and `other` share the very same media allocation
    pub fn shares_media_with(&self, other: &Post) -> bool {
        match (&self.media, &other.media) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Input for publishing a new root post
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPost {
    /// Title, must be non-blank
    pub title: String,
    /// Content, must be non-blank
    pub content: String,
    /// User tags
    pub tags: TagSet,
    /// Pre-bound media
    pub media: Option<MediaBundle>,
}

impl NewPost {
    /// Title and content, no tags or media
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NewPost {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Builder: set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Builder: attach media
    pub fn with_media(mut self, media: MediaBundle) -> Self {
        self.media = Some(media);
        self
    }
}

/// Input for forking an existing post
///
/// Omitted fields default to the source's values; the title gets the
/// configured fork suffix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForkRequest {
    /// Post to fork
    pub source: PostId,
    /// Override title
    pub title: Option<String>,
    /// Override content
    pub content: Option<String>,
    /// Replacement media; `None` inherits the source's bundle
    pub media: Option<MediaBundle>,
}

impl ForkRequest {
    /// Fork `source` with all defaults
    pub fn of(source: impl Into<PostId>) -> Self {
        ForkRequest {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Builder: override title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: override content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Builder: replace media
    pub fn with_media(mut self, media: MediaBundle) -> Self {
        self.media = Some(media);
        self
    }
}

/// Partial update of the editable fields
///
/// `parent`, `forks` and `id` are never touched by an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostUpdate {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Replacement tag set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagSet>,
}

impl PostUpdate {
    /// True if no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}
