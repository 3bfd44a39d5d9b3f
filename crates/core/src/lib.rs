//! Core types for the branching blog
//!
//! This crate defines the data model shared by every other crate:
//! - PostId: Sequential post identifier
//! - Post: The central entity with its parent/forks links
//! - TagSet: Case-insensitive, order-preserving tag set
//! - MediaBundle: Opaque media blobs plus cover analysis
//! - TreeNode: Reconstructed fork tree (pure data)
//! - SearchRequest/SearchResponse: Query engine contract
//! - Limits: Field size limits
//! - BlogError: Error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod media;
pub mod post;
pub mod search_types;
pub mod tags;
pub mod timestamp;
pub mod tree_types;
pub mod types;

pub use error::{BlogError, BlogResult};
pub use limits::{LimitError, Limits};
pub use media::{Blob, CoverAnalysis, CoverDescriptor, MediaBundle, Rgb};
pub use post::{ForkRequest, NewPost, Post, PostUpdate};
pub use search_types::{SearchRequest, SearchResponse};
pub use tags::TagSet;
pub use timestamp::Timestamp;
pub use tree_types::TreeNode;
pub use types::PostId;
