//! Post store engine for the branching blog
//!
//! This crate owns all mutable state:
//! - PostStore: canonical post collection behind a single RwLock
//! - Branch tree index: fork trees and lineage computed from snapshots
//! - Media binder: turns uploads into media bundles via an external analyzer
//! - BlogConfig: `branchblog.toml` configuration
//!
//! Handlers hold an `Arc<PostStore>`; there is no global state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod media;
pub mod store;
pub mod tree;

pub use config::{BlogConfig, ConfigError, DeletedPostPolicy, CONFIG_FILE_NAME};
pub use media::{bind, bind_optional, MediaAnalyzer, MediaUpload, NoopAnalyzer};
pub use store::{check_invariants, PostStore};
pub use tree::{ancestors, build_tree};
