//! Fork tree command handlers.

use branchblog_core::PostId;
use branchblog_engine::PostStore;

use crate::{Output, Result};

/// Handle Tree command.
pub fn tree(store: &PostStore, root: PostId) -> Result<Output> {
    Ok(Output::Tree(store.tree(root)?))
}

/// Handle Ancestors command.
pub fn ancestors(store: &PostStore, id: PostId) -> Result<Output> {
    Ok(Output::PostIds(store.ancestors(id)?))
}
