//! # Branchblog Executor
//!
//! The public API for the branching blog.
//!
//! This is the only crate users need to import. It provides:
//! - [`Blog`] - Typed interface over the command layer
//! - [`Command`]/[`Output`] - Serializable command interface (for transports)
//! - [`Error`] - Serializable error with a stable [`Error::kind`]
//!
//! ## Quick Start
//!
//! ```
//! use branchblog_executor::Blog;
//!
//! let blog = Blog::new();
//! let post = blog.create_post("Hello", "World", &["intro"]).unwrap();
//! blog.like(post.id).unwrap();
//! assert_eq!(blog.get(post.id).unwrap().likes, 1);
//! ```
//!
//! ## Transports
//!
//! An HTTP or CLI binding decodes a [`Command`], calls
//! [`Executor::execute`], and encodes the [`Output`] or [`Error`]. The store
//! is held by the executor; there is no ambient state.

#![warn(missing_docs)]

mod api;
mod command;
mod error;
mod executor;
mod handlers;
mod output;
mod types;

// Test modules
#[cfg(test)]
mod tests;

pub use api::Blog;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use types::{StoreStats, Upload};

// Re-export the data model so callers need one import
pub use branchblog_core::{
    Blob, BlogError, CoverAnalysis, MediaBundle, Post, PostId, PostUpdate, Rgb, SearchRequest,
    SearchResponse, TagSet, TreeNode,
};
pub use branchblog_engine::{
    BlogConfig, DeletedPostPolicy, MediaAnalyzer, NoopAnalyzer, PostStore, CONFIG_FILE_NAME,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
