//! Post Store Tests
//!
//! Integration tests for the post store, the tree builder and search:
//! - Structural invariants under random create/fork sequences
//! - Concurrent creates, forks and likes
//! - End-to-end fork and delete scenarios
//! - Search over live posts
//! - Deep fork chains and title limits on default forks

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod edges;
mod invariants;
mod media_sharing;
mod scenarios;
mod search;
