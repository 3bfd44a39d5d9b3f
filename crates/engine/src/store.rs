//! PostStore: canonical collection of posts
//!
//! ## Design
//!
//! Posts live in a `Vec<Post>` whose index is the post id, guarded by a
//! single `parking_lot::RwLock`:
//!
//! - Mutations (`create`, `fork`, `like`, `update`, `soft_delete`) hold the
//!   write lock for their whole read-validate-write sequence, so id
//!   allocation and like increments are atomic.
//! - Reads (`get`, `list`, search, tree) hold the read lock and see a
//!   consistent snapshot; a post is never visible half-built because it is
//!   fully constructed before it is pushed.
//!
//! No operation does I/O or blocks while holding the lock.
//!
//! ## Invariants
//!
//! - `posts[i].id == i` (no gaps, no reuse)
//! - `parent`, if set, is strictly less than the child's id
//! - a post with `parent == q` appears exactly once in `q.forks`

use crate::config::BlogConfig;
use branchblog_core::{
    BlogError, BlogResult, ForkRequest, NewPost, Post, PostId, PostUpdate, TagSet, Timestamp,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Thread-safe, in-memory post store
///
/// Share it between request handlers as `Arc<PostStore>`.
///
/// ## Example
///
/// ```
/// use branchblog_core::{ForkRequest, NewPost};
/// use branchblog_engine::PostStore;
///
/// let store = PostStore::new();
/// let a = store.create(NewPost::new("Hello", "World")).unwrap();
/// let b = store.fork(ForkRequest::of(a.id).with_title("Hello v2")).unwrap();
/// assert_eq!(b.parent, Some(a.id));
/// assert_eq!(store.get(a.id).unwrap().forks, vec![b.id]);
/// ```
#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
    config: BlogConfig,
}

impl PostStore {
    /// Empty store with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with the given configuration
    pub fn with_config(config: BlogConfig) -> Self {
        PostStore {
            posts: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Rebuild a store from previously exported posts
    ///
    /// Every structural invariant is checked; a violation yields
    /// `CorruptState` and no store is built.
    pub fn restore(posts: Vec<Post>, config: BlogConfig) -> BlogResult<Self> {
        check_invariants(&posts)?;
        info!(target: "branchblog::store", posts = posts.len(), "Restored post store");
        Ok(PostStore {
            posts: RwLock::new(posts),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    // ========== Mutations ==========

    /// Publish a new root post
    ///
    /// ## Errors
    /// - `Validation` if title or content is blank or a limit is exceeded,
    ///   counting tags suggested by the media
    pub fn create(&self, req: NewPost) -> BlogResult<Post> {
        let limits = &self.config.limits;
        limits.validate_title(&req.title)?;
        limits.validate_content(&req.content)?;

        let mut tags = req.tags;
        let media = req.media.map(|bundle| {
            tags.merge(bundle.suggested_tags());
            Arc::new(bundle)
        });
        // Tags suggested by the cover count against the same limits
        limits.validate_tags(&tags)?;

        let mut posts = self.posts.write();
        let id = PostId::from_index(posts.len());
        let post = Post {
            id,
            title: req.title,
            content: req.content,
            tags,
            likes: 0,
            created_at: Timestamp::now(),
            parent: None,
            forks: Vec::new(),
            deleted: false,
            media,
        };
        posts.push(post.clone());

        info!(target: "branchblog::store", id = %id, "Post created");
        Ok(post)
    }

    /// Fork an existing post
    ///
    /// Title defaults to the source's title plus the configured suffix,
    /// with the source title shortened to fit the title limit. Content
    /// defaults to the source's content. Tags are copied from the source.
    /// Without new media the fork shares the source's bundle until either
    /// side writes to it.
    ///
    /// ## Errors
    /// - `NotFound` if the source does not exist
    /// - `PostDeleted` if the source is deleted and the policy rejects it
    /// - `Validation` if a supplied title/content is blank or too long, or
    ///   new media pushes the tags past their limits
    pub fn fork(&self, req: ForkRequest) -> BlogResult<Post> {
        let mut posts = self.posts.write();
        let source = self.mutable_slot(&posts, req.source)?;

        let limits = &self.config.limits;
        let title = match req.title {
            Some(title) => {
                limits.validate_title(&title)?;
                title
            }
            None => limits.fork_title(&source.title, &self.config.fork_title_suffix),
        };
        let content = match req.content {
            Some(content) => {
                limits.validate_content(&content)?;
                content
            }
            None => source.content.clone(),
        };

        let mut tags = source.tags.clone();
        let media = match req.media {
            Some(bundle) => {
                tags.merge(bundle.suggested_tags());
                limits.validate_tags(&tags)?;
                Some(Arc::new(bundle))
            }
            None => source.media.clone(),
        };

        let id = PostId::from_index(posts.len());
        let post = Post {
            id,
            title,
            content,
            tags,
            likes: 0,
            created_at: Timestamp::now(),
            parent: Some(req.source),
            forks: Vec::new(),
            deleted: false,
            media,
        };
        posts.push(post.clone());
        slot_mut(&mut posts, req.source)?.forks.push(id);

        info!(target: "branchblog::store", id = %id, parent = %req.source, "Post forked");
        Ok(post)
    }

    /// Increment the like counter, returning the new count
    ///
    /// ## Errors
    /// - `NotFound` if the post does not exist
    /// - `PostDeleted` if the post is deleted and the policy rejects it
    pub fn like(&self, id: PostId) -> BlogResult<u64> {
        let mut posts = self.posts.write();
        self.mutable_slot(&posts, id)?;
        let post = slot_mut(&mut posts, id)?;
        post.likes = post.likes.saturating_add(1);
        debug!(target: "branchblog::store", id = %id, likes = post.likes, "Post liked");
        Ok(post.likes)
    }

    /// Partially update title, content and/or tags
    ///
    /// ## Errors
    /// - `NotFound` if the post does not exist
    /// - `PostDeleted` if the post is deleted and the policy rejects it
    /// - `Validation` if a supplied field is blank or exceeds a limit
    pub fn update(&self, id: PostId, update: PostUpdate) -> BlogResult<Post> {
        let limits = &self.config.limits;
        if let Some(title) = &update.title {
            limits.validate_title(title)?;
        }
        if let Some(content) = &update.content {
            limits.validate_content(content)?;
        }
        if let Some(tags) = &update.tags {
            limits.validate_tags(tags)?;
        }

        let mut posts = self.posts.write();
        self.mutable_slot(&posts, id)?;
        let post = slot_mut(&mut posts, id)?;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(tags) = update.tags {
            post.tags = tags;
        }
        debug!(target: "branchblog::store", id = %id, "Post updated");
        Ok(post.clone())
    }

    /// Add tags to a post without replacing existing ones
    ///
    /// ## Errors
    /// Same as [`PostStore::update`].
    pub fn add_tags(&self, id: PostId, extra: &TagSet) -> BlogResult<Post> {
        let mut posts = self.posts.write();
        self.mutable_slot(&posts, id)?;
        let post = slot_mut(&mut posts, id)?;
        let mut tags = post.tags.clone();
        tags.merge(extra.iter());
        self.config.limits.validate_tags(&tags)?;
        post.tags = tags;
        Ok(post.clone())
    }

    /// Mark a post deleted
    ///
    /// Deleting an already deleted post is a no-op. Forks of the post are
    /// unaffected and the post stays addressable by id.
    ///
    /// ## Errors
    /// - `NotFound` if the post does not exist
    pub fn soft_delete(&self, id: PostId) -> BlogResult<()> {
        let mut posts = self.posts.write();
        let post = slot_mut(&mut posts, id)?;
        if post.deleted {
            debug!(target: "branchblog::store", id = %id, "Post already deleted");
            return Ok(());
        }
        post.deleted = true;
        info!(target: "branchblog::store", id = %id, "Post soft-deleted");
        Ok(())
    }

    // ========== Reads ==========

    /// Fetch a post by id, deleted or not
    ///
    /// ## Errors
    /// - `NotFound` if the post does not exist
    pub fn get(&self, id: PostId) -> BlogResult<Post> {
        let posts = self.posts.read();
        slot(&posts, id).cloned()
    }

    /// All live posts in ascending id order
    pub fn list(&self) -> Vec<Post> {
        self.read(|posts| posts.iter().filter(|p| !p.deleted).cloned().collect())
    }

    /// All live posts, newest first
    pub fn list_newest_first(&self) -> Vec<Post> {
        let mut posts = self.list();
        posts.reverse();
        posts
    }

    /// Clone of every post including deleted ones, for an external
    /// storage backend
    pub fn export(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    /// Run `f` against a consistent snapshot of all posts (deleted included)
    ///
    /// The read lock is held for the duration of `f`; keep it short.
    pub fn read<R>(&self, f: impl FnOnce(&[Post]) -> R) -> R {
        let posts = self.posts.read();
        f(&posts)
    }

    /// Number of posts ever created, deleted ones included
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    /// True if no post has been created
    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }

    /// Number of posts that are not deleted
    pub fn live_count(&self) -> usize {
        self.read(|posts| posts.iter().filter(|p| !p.deleted).count())
    }

    // ========== Helpers ==========

    /// Look up a post that is about to be mutated, applying the deleted
    /// post policy
    fn mutable_slot<'a>(&self, posts: &'a [Post], id: PostId) -> BlogResult<&'a Post> {
        let post = slot(posts, id)?;
        if post.deleted && self.config.deleted_posts.rejects() {
            warn!(target: "branchblog::store", id = %id, "Rejected mutation of deleted post");
            return Err(BlogError::deleted(id));
        }
        Ok(post)
    }
}

pub(crate) fn slot(posts: &[Post], id: PostId) -> BlogResult<&Post> {
    id.index()
        .and_then(|i| posts.get(i))
        .ok_or(BlogError::NotFound { id })
}

fn slot_mut(posts: &mut [Post], id: PostId) -> BlogResult<&mut Post> {
    id.index()
        .and_then(|i| posts.get_mut(i))
        .ok_or(BlogError::NotFound { id })
}

/// Verify the structural invariants of a post sequence
pub fn check_invariants(posts: &[Post]) -> BlogResult<()> {
    for (index, post) in posts.iter().enumerate() {
        if post.id != PostId::from_index(index) {
            return Err(BlogError::corrupt(format!(
                "post at index {} has id {}",
                index, post.id
            )));
        }
        if let Some(parent) = post.parent {
            if parent >= post.id {
                return Err(BlogError::corrupt(format!(
                    "post {} has parent {} that is not older",
                    post.id, parent
                )));
            }
            let listed = slot(posts, parent)
                .map_err(|_| {
                    BlogError::corrupt(format!("post {} has missing parent {}", post.id, parent))
                })?
                .forks
                .iter()
                .filter(|&&f| f == post.id)
                .count();
            if listed != 1 {
                return Err(BlogError::corrupt(format!(
                    "post {} listed {} times in forks of {}",
                    post.id, listed, parent
                )));
            }
        }
        for &fork in &post.forks {
            let child = slot(posts, fork).map_err(|_| {
                BlogError::corrupt(format!("post {} lists missing fork {}", post.id, fork))
            })?;
            if child.parent != Some(post.id) {
                return Err(BlogError::corrupt(format!(
                    "post {} lists fork {} whose parent is {:?}",
                    post.id, fork, child.parent
                )));
            }
        }
    }
    Ok(())
}
