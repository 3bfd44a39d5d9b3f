//! Branchblog - a blog whose posts fork into version trees
//!
//! Every post is either a root or a fork of an earlier post. Forks copy
//! their source's content and tags and share its media until they replace
//! it, so a post and its descendants form a tree that can be rendered at
//! any time.
//!
//! # Quick Start
//!
//! ```
//! use branchblog::Blog;
//!
//! let blog = Blog::new();
//! let hello = blog.create_post("Hello", "World", &["intro"]).unwrap();
//! let v2 = blog.fork_post(hello.id, Some("Hello v2")).unwrap();
//!
//! assert_eq!(v2.parent, Some(hello.id));
//! assert_eq!(v2.content, "World");
//! assert_eq!(blog.tree(hello.id).unwrap().node_count(), 2);
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! The [`Blog`] struct provides a convenient high-level interface.
//!
//! The store, tree builder and search internals are not exposed; only the
//! executor API is public.

// Re-export the public API from branchblog-executor
pub use branchblog_executor::*;
