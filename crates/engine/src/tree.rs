//! Branch tree index
//!
//! Fork trees are never stored; they are computed on demand from the
//! `parent`/`forks` fields of a consistent snapshot, so they cannot drift
//! from the store.
//!
//! Fork ids are always greater than their parent's, which makes the
//! relation acyclic. Traversal still enforces a depth bound of
//! `posts.len() + 1` and reports `CorruptState` if it is exceeded.

use crate::store::{slot, PostStore};
use branchblog_core::{BlogError, BlogResult, Post, PostId, TreeNode};
use tracing::warn;

/// Reconstruct the fork tree rooted at `root` from a snapshot
///
/// Soft-deleted posts appear as nodes like any other.
///
/// ## Errors
/// - `NotFound` if `root` is not in `posts`
/// - `CorruptState` if a fork id is dangling or the depth bound is exceeded
pub fn build_tree(posts: &[Post], root: PostId) -> BlogResult<TreeNode> {
    let limit = max_depth(posts);
    let mut stack = vec![Frame::new(slot(posts, root)?)];

    // Post-order walk on an explicit stack; chains may be as deep as the store
    loop {
        let top = stack.len() - 1;
        let frame = &mut stack[top];
        match frame.post.forks.get(frame.next).copied() {
            Some(fork) => {
                frame.next += 1;
                let parent = frame.post.id;
                let child = slot(posts, fork).map_err(|_| {
                    warn!(target: "branchblog::tree", id = %parent, fork = %fork, "Dangling fork id");
                    BlogError::corrupt(format!("post {} lists missing fork {}", parent, fork))
                })?;
                if stack.len() >= limit {
                    return Err(depth_exceeded(child.id, limit));
                }
                stack.push(Frame::new(child));
            }
            None => {
                let node = stack.swap_remove(top).into_node();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => return Ok(node),
                }
            }
        }
    }
}

/// Parent chain of `id`, nearest first, ending at its root
///
/// A root post has no ancestors.
///
/// ## Errors
/// - `NotFound` if `id` is not in `posts`
/// - `CorruptState` if a parent is dangling or the chain is too long
pub fn ancestors(posts: &[Post], id: PostId) -> BlogResult<Vec<PostId>> {
    let limit = max_depth(posts);
    let mut chain = Vec::new();
    let mut current = slot(posts, id)?;
    while let Some(parent) = current.parent {
        if chain.len() >= limit {
            return Err(depth_exceeded(id, limit));
        }
        let child = current.id;
        current = slot(posts, parent).map_err(|_| {
            BlogError::corrupt(format!("post {} has missing parent {}", child, parent))
        })?;
        chain.push(parent);
    }
    Ok(chain)
}

fn max_depth(posts: &[Post]) -> usize {
    posts.len() + 1
}

/// A post being expanded, with the children finished so far
struct Frame<'a> {
    post: &'a Post,
    next: usize,
    children: Vec<TreeNode>,
}

impl<'a> Frame<'a> {
    fn new(post: &'a Post) -> Self {
        Frame {
            post,
            next: 0,
            children: Vec::with_capacity(post.forks.len()),
        }
    }

    fn into_node(self) -> TreeNode {
        TreeNode {
            id: self.post.id,
            title: self.post.title.clone(),
            deleted: self.post.deleted,
            children: self.children,
        }
    }
}

fn depth_exceeded(id: PostId, limit: usize) -> BlogError {
    warn!(target: "branchblog::tree", id = %id, limit, "Tree depth bound exceeded");
    BlogError::corrupt(format!(
        "traversal from post {} exceeded depth bound {}",
        id, limit
    ))
}

impl PostStore {
    /// Fork tree rooted at `root`, from a consistent snapshot
    pub fn tree(&self, root: PostId) -> BlogResult<TreeNode> {
        self.read(|posts| build_tree(posts, root))
    }

    /// Parent chain of `id`, nearest first
    pub fn ancestors(&self, id: PostId) -> BlogResult<Vec<PostId>> {
        self.read(|posts| ancestors(posts, id))
    }
}
