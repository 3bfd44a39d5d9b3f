//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant; the mapping is listed
//! on [`Command`](crate::Command).

use branchblog_core::{Post, PostId, SearchResponse, TreeNode};
use serde::{Deserialize, Serialize};

use crate::types::StoreStats;

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (delete)
    Unit,

    /// Ping response
    Pong { version: String },

    /// A single post
    Post(Post),

    /// Posts in listing order
    Posts(Vec<Post>),

    /// New like count
    Likes(u64),

    /// Search hits and their count
    Search(SearchResponse),

    /// Reconstructed fork tree
    Tree(TreeNode),

    /// Post ids (lineage)
    PostIds(Vec<PostId>),

    /// Store statistics
    Stats(StoreStats),
}
