//! Search command handler.

use std::sync::Arc;

use branchblog_core::SearchRequest;
use branchblog_engine::PostStore;
use branchblog_search::PostStoreSearchExt;

use crate::{Output, Result};

/// Handle Search command.
pub fn search(store: &Arc<PostStore>, query: Option<String>, tag: Option<String>) -> Result<Output> {
    let response = store.query().search(&SearchRequest { query, tag });
    Ok(Output::Search(response))
}
