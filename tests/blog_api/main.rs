//! Blog API Tests
//!
//! Exercises the public `branchblog` facade end to end:
//! - Typed `Blog` operations
//! - JSON command transport
//! - Configuration loading

mod facade;
mod transport;
