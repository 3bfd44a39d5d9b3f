//! Fork tree types
//!
//! A [`TreeNode`] is pure data: construction lives in the engine, rendering
//! is left to whatever displays it.

use crate::types::PostId;
use serde::{Deserialize, Serialize};

/// One node of a reconstructed fork tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Post id
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Whether the post is soft-deleted (still shown as a node)
    #[serde(default)]
    pub deleted: bool,
    /// Forks in creation order
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Leaf node
    pub fn leaf(id: impl Into<PostId>, title: impl Into<String>) -> Self {
        TreeNode {
            id: id.into(),
            title: title.into(),
            deleted: false,
            children: Vec::new(),
        }
    }

    /// Total nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Height of this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Ids in pre-order (node, then children left to right)
    pub fn ids(&self) -> Vec<PostId> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.id);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

// Fork chains can be as deep as the store is long, so children are
// flattened onto a heap stack instead of dropped recursively.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
