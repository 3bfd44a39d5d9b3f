//! Query engine: text and tag filtering over live posts
//!
//! - Text query: case-insensitive substring of title, content, or the tags
//!   joined with spaces
//! - Tag filter: case-insensitive exact membership
//! - Both filters are ANDed; blank filters are ignored
//! - Soft-deleted posts never match
//!
//! Results come back in ascending id order. Media-derived tags are matched
//! exactly like user tags.

use branchblog_core::{Post, SearchRequest, SearchResponse};
use branchblog_engine::PostStore;
use std::sync::Arc;
use tracing::debug;

/// Stateless search facade over a shared store
///
/// Every search runs against one consistent snapshot of the store.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<PostStore>,
}

impl QueryEngine {
    /// Create a query engine over `store`
    pub fn new(store: Arc<PostStore>) -> Self {
        QueryEngine { store }
    }

    /// Run a search
    pub fn search(&self, req: &SearchRequest) -> SearchResponse {
        let response = self.store.read(|posts| search_posts(posts, req));
        debug!(
            target: "branchblog::search",
            query = ?req.query,
            tag = ?req.tag,
            hits = response.count,
            "Search executed"
        );
        response
    }

    /// Convenience: search by optional query and tag strings
    pub fn search_by(&self, query: Option<&str>, tag: Option<&str>) -> SearchResponse {
        self.search(&SearchRequest {
            query: query.map(str::to_string),
            tag: tag.map(str::to_string),
        })
    }
}

/// Filter a snapshot of posts
pub fn search_posts(posts: &[Post], req: &SearchRequest) -> SearchResponse {
    let query = req.normalized_query();
    let tag = req.normalized_tag();
    let hits = posts
        .iter()
        .filter(|p| !p.deleted)
        .filter(|p| query.as_deref().map_or(true, |q| matches_text(p, q)))
        .filter(|p| tag.as_deref().map_or(true, |t| p.tags.contains(t)))
        .cloned()
        .collect();
    SearchResponse::new(hits)
}

/// True if the lowercased `needle` occurs in title, content or joined tags
fn matches_text(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.content.to_lowercase().contains(needle)
        || post.tags.joined().to_lowercase().contains(needle)
}
