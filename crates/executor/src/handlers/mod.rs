//! Command handlers.
//!
//! Each submodule implements the handlers for one group of commands by
//! dispatching directly to the engine and search crates.

pub mod branch;
pub mod post;
pub mod search;
