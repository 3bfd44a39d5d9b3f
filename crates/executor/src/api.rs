//! High-level typed wrapper for the Executor.
//!
//! The [`Blog`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```
//! use branchblog_executor::Blog;
//!
//! let blog = Blog::new();
//! let hello = blog.create_post("Hello", "World", &["intro"]).unwrap();
//! let v2 = blog.fork_post(hello.id, Some("Hello v2")).unwrap();
//! let tree = blog.tree(hello.id).unwrap();
//! assert_eq!(tree.children[0].id, v2.id);
//! ```

use std::sync::Arc;

use branchblog_core::{Post, PostId, PostUpdate, SearchResponse, TreeNode};
use branchblog_engine::{BlogConfig, MediaAnalyzer, NoopAnalyzer, PostStore};

use crate::types::{StoreStats, Upload};
use crate::{Command, Error, Executor, Output, Result};

/// High-level typed wrapper for blog operations.
#[derive(Clone)]
pub struct Blog {
    executor: Executor,
}

impl Default for Blog {
    fn default() -> Self {
        Self::new()
    }
}

fn unexpected(command: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}", command),
    }
}

impl Blog {
    /// Empty blog with default configuration and no media analysis
    pub fn new() -> Self {
        Self::with_config(BlogConfig::default())
    }

    /// Empty blog with the given configuration
    pub fn with_config(config: BlogConfig) -> Self {
        Self::with_analyzer(config, Arc::new(NoopAnalyzer))
    }

    /// Empty blog with the given configuration and media analyzer
    pub fn with_analyzer(config: BlogConfig, analyzer: Arc<dyn MediaAnalyzer>) -> Self {
        let store = Arc::new(PostStore::with_config(config));
        Blog {
            executor: Executor::with_analyzer(store, analyzer),
        }
    }

    /// Wrap an existing executor
    pub fn from_executor(executor: Executor) -> Self {
        Blog { executor }
    }

    /// The underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Publish a new root post.
    pub fn create_post(&self, title: &str, content: &str, tags: &[&str]) -> Result<Post> {
        self.create_post_with_media(title, content, tags, None)
    }

    /// Publish a new root post with media.
    pub fn create_post_with_media(
        &self,
        title: &str,
        content: &str,
        tags: &[&str],
        media: Option<Upload>,
    ) -> Result<Post> {
        match self.executor.execute(Command::CreatePost {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            media,
        })? {
            Output::Post(post) => Ok(post),
            _ => Err(unexpected("CreatePost")),
        }
    }

    /// Fork a post, optionally overriding the title.
    pub fn fork_post(&self, source: PostId, title: Option<&str>) -> Result<Post> {
        match self.executor.execute(Command::ForkPost {
            source,
            title: title.map(str::to_string),
            content: None,
            media: None,
        })? {
            Output::Post(post) => Ok(post),
            _ => Err(unexpected("ForkPost")),
        }
    }

    /// Like a post, returning the new count.
    pub fn like(&self, id: PostId) -> Result<u64> {
        match self.executor.execute(Command::LikePost { id })? {
            Output::Likes(n) => Ok(n),
            _ => Err(unexpected("LikePost")),
        }
    }

    /// Partially update a post.
    pub fn update(&self, id: PostId, update: PostUpdate) -> Result<Post> {
        match self.executor.execute(Command::UpdatePost { id, update })? {
            Output::Post(post) => Ok(post),
            _ => Err(unexpected("UpdatePost")),
        }
    }

    /// Soft-delete a post.
    pub fn delete(&self, id: PostId) -> Result<()> {
        match self.executor.execute(Command::DeletePost { id })? {
            Output::Unit => Ok(()),
            _ => Err(unexpected("DeletePost")),
        }
    }

    /// Fetch a post, deleted or not.
    pub fn get(&self, id: PostId) -> Result<Post> {
        match self.executor.execute(Command::GetPost { id })? {
            Output::Post(post) => Ok(post),
            _ => Err(unexpected("GetPost")),
        }
    }

    /// Live posts in ascending id order.
    pub fn list(&self) -> Result<Vec<Post>> {
        match self
            .executor
            .execute(Command::ListPosts { newest_first: false })?
        {
            Output::Posts(posts) => Ok(posts),
            _ => Err(unexpected("ListPosts")),
        }
    }

    /// Search live posts.
    pub fn search(&self, query: Option<&str>, tag: Option<&str>) -> Result<SearchResponse> {
        match self.executor.execute(Command::Search {
            query: query.map(str::to_string),
            tag: tag.map(str::to_string),
        })? {
            Output::Search(resp) => Ok(resp),
            _ => Err(unexpected("Search")),
        }
    }

    /// Fork tree rooted at `root`.
    pub fn tree(&self, root: PostId) -> Result<TreeNode> {
        match self.executor.execute(Command::Tree { root })? {
            Output::Tree(tree) => Ok(tree),
            _ => Err(unexpected("Tree")),
        }
    }

    /// Parent chain of a post.
    pub fn ancestors(&self, id: PostId) -> Result<Vec<PostId>> {
        match self.executor.execute(Command::Ancestors { id })? {
            Output::PostIds(ids) => Ok(ids),
            _ => Err(unexpected("Ancestors")),
        }
    }

    /// Post counts.
    pub fn stats(&self) -> Result<StoreStats> {
        match self.executor.execute(Command::Stats)? {
            Output::Stats(stats) => Ok(stats),
            _ => Err(unexpected("Stats")),
        }
    }
}
