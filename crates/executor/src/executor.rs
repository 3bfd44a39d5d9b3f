//! The Executor - single entry point to the blog engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate store operations and converts results to outputs.

use std::sync::Arc;

use branchblog_engine::{MediaAnalyzer, NoopAnalyzer, PostStore};
use tracing::debug;

use crate::handlers;
use crate::{Command, Output, Result};

/// The command executor - single entry point to the blog engine.
///
/// The Executor holds a shared store and the media analyzer used for
/// uploads; it keeps no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across request handlers.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use branchblog_engine::PostStore;
/// use branchblog_executor::{Command, Executor, Output};
///
/// let executor = Executor::new(Arc::new(PostStore::new()));
/// let out = executor.execute(Command::CreatePost {
///     title: "Hello".into(),
///     content: "World".into(),
///     tags: vec![],
///     media: None,
/// }).unwrap();
/// assert!(matches!(out, Output::Post(_)));
/// ```
#[derive(Clone)]
pub struct Executor {
    store: Arc<PostStore>,
    analyzer: Arc<dyn MediaAnalyzer>,
}

impl Executor {
    /// Executor over `store` with no media analysis
    pub fn new(store: Arc<PostStore>) -> Self {
        Self::with_analyzer(store, Arc::new(NoopAnalyzer))
    }

    /// Executor over `store` using `analyzer` for cover images
    pub fn with_analyzer(store: Arc<PostStore>, analyzer: Arc<dyn MediaAnalyzer>) -> Self {
        Self { store, analyzer }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<PostStore> {
        &self.store
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let write = cmd.is_write();
        debug!(target: "branchblog::executor", command = name, write, "Executing command");
        let result = self.dispatch(cmd);
        if write {
            if let Err(e) = &result {
                debug!(target: "branchblog::executor", command = name, error = %e, "Write rejected; store unchanged");
            }
        }
        result
    }

    fn dispatch(&self, cmd: Command) -> Result<Output> {
        let store = &self.store;
        let analyzer = self.analyzer.as_ref();
        match cmd {
            Command::Ping => Ok(Output::Pong {
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
            Command::CreatePost {
                title,
                content,
                tags,
                media,
            } => handlers::post::create_post(store, analyzer, title, content, tags, media),
            Command::ForkPost {
                source,
                title,
                content,
                media,
            } => handlers::post::fork_post(store, analyzer, source, title, content, media),
            Command::LikePost { id } => handlers::post::like_post(store, id),
            Command::UpdatePost { id, update } => handlers::post::update_post(store, id, update),
            Command::DeletePost { id } => handlers::post::delete_post(store, id),
            Command::GetPost { id } => handlers::post::get_post(store, id),
            Command::ListPosts { newest_first } => handlers::post::list_posts(store, newest_first),
            Command::Search { query, tag } => handlers::search::search(store, query, tag),
            Command::Tree { root } => handlers::branch::tree(store, root),
            Command::Ancestors { id } => handlers::branch::ancestors(store, id),
            Command::Stats => handlers::post::stats(store),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns one result per command, in order. A failing command does
    /// not stop the batch.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Decode a JSON command and execute it.
    ///
    /// Decoding failures are reported as `Error::InvalidCommand`.
    pub fn execute_json(&self, json: &str) -> Result<Output> {
        let cmd: Command = serde_json::from_str(json)?;
        self.execute(cmd)
    }
}
