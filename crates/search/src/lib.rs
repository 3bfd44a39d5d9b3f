//! Search over the branching blog post store
//!
//! This crate provides:
//! - QueryEngine: text and tag filtering over a consistent store snapshot
//! - search_posts: the same filter over an arbitrary post slice
//! - PostStoreSearchExt: extension trait adding `.query()` to `Arc<PostStore>`
//!
//! # Usage
//!
//! ```
//! use branchblog_core::{NewPost, SearchRequest};
//! use branchblog_engine::PostStore;
//! use branchblog_search::PostStoreSearchExt;
//! use std::sync::Arc;
//!
//! let store = Arc::new(PostStore::new());
//! store.create(NewPost::new("Hello", "World")).unwrap();
//! let response = store.query().search(&SearchRequest::text("hello"));
//! assert_eq!(response.count, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod query;

use branchblog_engine::PostStore;
use std::sync::Arc;

pub use query::{search_posts, QueryEngine};

/// Extension trait giving a shared store a `.query()` accessor
pub trait PostStoreSearchExt {
    /// Query engine over this store
    fn query(&self) -> QueryEngine;
}

impl PostStoreSearchExt for Arc<PostStore> {
    fn query(&self) -> QueryEngine {
        QueryEngine::new(Arc::clone(self))
    }
}
