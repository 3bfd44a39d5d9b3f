//! Identifier types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential post identifier
///
/// Ids are assigned in creation order starting at 0 and equal the post's
/// index in the store. They are never reused, even after soft-delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Wrap a raw id
    #[inline]
    pub const fn new(raw: u64) -> Self {
        PostId(raw)
    }

    /// Raw numeric value
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Position of this post in the store, if it fits in `usize`
    #[inline]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Id for the post stored at `index`
    #[inline]
    pub fn from_index(index: usize) -> Self {
        PostId(index as u64)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(raw: u64) -> Self {
        PostId(raw)
    }
}

impl From<PostId> for u64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}
