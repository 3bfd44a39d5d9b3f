//! Command enum defining all blog operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON by any transport
//! - **Pure data**: No closures or executable code

use branchblog_core::{PostId, PostUpdate};
use serde::{Deserialize, Serialize};

use crate::types::Upload;

/// A command is a self-contained, serializable operation.
///
/// | Command | Output | Errors |
/// |---------|--------|--------|
/// | `CreatePost` | `Post` | Validation |
/// | `ForkPost` | `Post` | NotFound, PostDeleted, Validation |
/// | `LikePost` | `Likes` | NotFound, PostDeleted |
/// | `UpdatePost` | `Post` | NotFound, PostDeleted, Validation |
/// | `DeletePost` | `Unit` | NotFound |
/// | `GetPost` | `Post` | NotFound |
/// | `ListPosts` | `Posts` | - |
/// | `Search` | `Search` | - |
/// | `Tree` | `Tree` | NotFound, CorruptState |
/// | `Ancestors` | `PostIds` | NotFound, CorruptState |
/// | `Stats` | `Stats` | - |
///
/// # Example
///
/// ```
/// use branchblog_executor::Command;
///
/// let cmd: Command = serde_json::from_str(r#"{"LikePost":{"id":0}}"#).unwrap();
/// assert!(matches!(cmd, Command::LikePost { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Liveness check.
    /// Returns: `Output::Pong`
    Ping,

    /// Publish a new root post.
    /// Returns: `Output::Post`
    CreatePost {
        title: String,
        content: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media: Option<Upload>,
    },

    /// Fork an existing post. Omitted fields default to the source's.
    /// Returns: `Output::Post`
    ForkPost {
        source: PostId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media: Option<Upload>,
    },

    /// Increment a post's like counter.
    /// Returns: `Output::Likes`
    LikePost { id: PostId },

    /// Partially update title/content/tags.
    /// Returns: `Output::Post`
    UpdatePost {
        id: PostId,
        #[serde(default)]
        update: PostUpdate,
    },

    /// Soft-delete a post (idempotent).
    /// Returns: `Output::Unit`
    DeletePost { id: PostId },

    /// Fetch a post, deleted or not.
    /// Returns: `Output::Post`
    GetPost { id: PostId },

    /// List live posts.
    /// Returns: `Output::Posts`
    ListPosts {
        #[serde(default)]
        newest_first: bool,
    },

    /// Text and tag search over live posts.
    /// Returns: `Output::Search`
    Search {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        query: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
    },

    /// Reconstruct the fork tree rooted at `root`.
    /// Returns: `Output::Tree`
    Tree { root: PostId },

    /// Parent chain of a post, nearest first.
    /// Returns: `Output::PostIds`
    Ancestors { id: PostId },

    /// Post counts.
    /// Returns: `Output::Stats`
    Stats,
}

impl Command {
    /// True for commands that change store state
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::CreatePost { .. }
                | Command::ForkPost { .. }
                | Command::LikePost { .. }
                | Command::UpdatePost { .. }
                | Command::DeletePost { .. }
        )
    }

    /// Variant name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "Ping",
            Command::CreatePost { .. } => "CreatePost",
            Command::ForkPost { .. } => "ForkPost",
            Command::LikePost { .. } => "LikePost",
            Command::UpdatePost { .. } => "UpdatePost",
            Command::DeletePost { .. } => "DeletePost",
            Command::GetPost { .. } => "GetPost",
            Command::ListPosts { .. } => "ListPosts",
            Command::Search { .. } => "Search",
            Command::Tree { .. } => "Tree",
            Command::Ancestors { .. } => "Ancestors",
            Command::Stats => "Stats",
        }
    }
}
