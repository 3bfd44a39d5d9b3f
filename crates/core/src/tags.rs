//! Case-insensitive tag set
//!
//! Tags keep the spelling they were first added with but compare
//! case-insensitively, so `Rust` and `rust` are the same tag. Insertion order
//! is preserved for display.

use serde::{Deserialize, Serialize};

/// Ordered, case-insensitively deduplicated set of tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma separated list: `"a, b,,c"` -> `[a, b, c]`
    pub fn parse_list(input: &str) -> Self {
        input.split(',').collect()
    }

    /// Insert a tag; returns false if blank or already present
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Append every tag from `other` that is not present yet
    pub fn merge<I, S>(&mut self, other: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in other {
            self.insert(tag);
        }
    }

    /// Case-insensitive membership
    pub fn contains(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }

    /// Tags joined with a single space, used for text matching
    pub fn joined(&self) -> String {
        self.tags.join(" ")
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when there are no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        set.merge(iter);
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}
