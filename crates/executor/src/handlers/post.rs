//! Post command handlers.
//!
//! Media is bound here, before the store is called, so analysis never runs
//! under the store lock.

use branchblog_core::{ForkRequest, NewPost, PostId, PostUpdate, TagSet};
use branchblog_engine::{bind_optional, MediaAnalyzer, PostStore};

use crate::types::{StoreStats, Upload};
use crate::{Output, Result};

/// Handle CreatePost command.
pub fn create_post(
    store: &PostStore,
    analyzer: &dyn MediaAnalyzer,
    title: String,
    content: String,
    tags: Vec<String>,
    media: Option<Upload>,
) -> Result<Output> {
    let media = bind_optional(media.map(Into::into), analyzer);
    let post = store.create(NewPost {
        title,
        content,
        tags: TagSet::from(tags),
        media,
    })?;
    Ok(Output::Post(post))
}

/// Handle ForkPost command.
pub fn fork_post(
    store: &PostStore,
    analyzer: &dyn MediaAnalyzer,
    source: PostId,
    title: Option<String>,
    content: Option<String>,
    media: Option<Upload>,
) -> Result<Output> {
    let media = bind_optional(media.map(Into::into), analyzer);
    let post = store.fork(ForkRequest {
        source,
        title,
        content,
        media,
    })?;
    Ok(Output::Post(post))
}

/// Handle LikePost command.
pub fn like_post(store: &PostStore, id: PostId) -> Result<Output> {
    Ok(Output::Likes(store.like(id)?))
}

/// Handle UpdatePost command.
pub fn update_post(store: &PostStore, id: PostId, update: PostUpdate) -> Result<Output> {
    Ok(Output::Post(store.update(id, update)?))
}

/// Handle DeletePost command.
pub fn delete_post(store: &PostStore, id: PostId) -> Result<Output> {
    store.soft_delete(id)?;
    Ok(Output::Unit)
}

/// Handle GetPost command.
pub fn get_post(store: &PostStore, id: PostId) -> Result<Output> {
    Ok(Output::Post(store.get(id)?))
}

/// Handle ListPosts command.
pub fn list_posts(store: &PostStore, newest_first: bool) -> Result<Output> {
    let posts = if newest_first {
        store.list_newest_first()
    } else {
        store.list()
    };
    Ok(Output::Posts(posts))
}

/// Handle Stats command.
pub fn stats(store: &PostStore) -> Result<Output> {
    Ok(Output::Stats(StoreStats {
        total: store.len(),
        live: store.live_count(),
    }))
}
