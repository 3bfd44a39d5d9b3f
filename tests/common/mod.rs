//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

pub use branchblog_core::{ForkRequest, NewPost, Post, PostId, TreeNode};
pub use branchblog_engine::{check_invariants, BlogConfig, DeletedPostPolicy, PostStore};

/// Fresh store with default configuration.
pub fn new_store() -> Arc<PostStore> {
    Arc::new(PostStore::new())
}

/// Create a root post with generated title and content.
pub fn create(store: &PostStore, n: usize) -> Post {
    store
        .create(NewPost::new(format!("Post {}", n), format!("Body {}", n)))
        .expect("create failed")
}

/// One shape step for building random forests.
///
/// `None` creates a root; `Some(k)` forks the post at index `k % len`.
pub type Step = Option<usize>;

/// Apply a sequence of steps, returning the ids in creation order.
pub fn apply_steps(store: &PostStore, steps: &[Step]) -> Vec<PostId> {
    let mut ids = Vec::new();
    for (n, step) in steps.iter().enumerate() {
        let post = match step {
            Some(k) if !ids.is_empty() => {
                let source = ids[k % ids.len()];
                store.fork(ForkRequest::of(source)).expect("fork failed")
            }
            _ => create(store, n),
        };
        ids.push(post.id);
    }
    ids
}

/// Number of posts reachable from `root` through fork edges, root included.
pub fn reachable_count(posts: &[Post], root: PostId) -> usize {
    let mut seen = HashSet::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if seen.insert(id) {
            if let Some(p) = posts.iter().find(|p| p.id == id) {
                stack.extend(p.forks.iter().copied());
            }
        }
    }
    seen.len()
}
