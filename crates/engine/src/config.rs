//! Blog configuration via `branchblog.toml`
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! [`BlogConfig::default`].

use branchblog_core::Limits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "branchblog.toml";

/// Suffix appended to a fork's title when none is supplied.
pub const DEFAULT_FORK_TITLE_SUFFIX: &str = " (fork)";

/// What to do when `like`, `update` or `fork` targets a soft-deleted post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletedPostPolicy {
    /// Fail with `BlogError::PostDeleted`
    #[default]
    Reject,
    /// Apply the mutation anyway
    Allow,
}

impl DeletedPostPolicy {
    /// True if mutations of deleted posts are refused
    pub fn rejects(&self) -> bool {
        matches!(self, DeletedPostPolicy::Reject)
    }
}

/// Store configuration loaded from `branchblog.toml`.
///
/// # Example
///
/// ```toml
/// fork_title_suffix = " (fork)"
/// deleted_posts = "reject"
///
/// [limits]
/// max_title_bytes = 512
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    /// Suffix for defaulted fork titles
    pub fork_title_suffix: String,
    /// Mutation policy for soft-deleted posts
    pub deleted_posts: DeletedPostPolicy,
    /// Field size limits
    pub limits: Limits,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            fork_title_suffix: DEFAULT_FORK_TITLE_SUFFIX.to_string(),
            deleted_posts: DeletedPostPolicy::default(),
            limits: Limits::default(),
        }
    }
}

/// Errors from loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config file '{path}': {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML did not parse into a config
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl BlogConfig {
    /// Builder: set the deleted-post policy
    pub fn with_deleted_posts(mut self, policy: DeletedPostPolicy) -> Self {
        self.deleted_posts = policy;
        self
    }

    /// Builder: set field limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Parse config from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Branching blog configuration
#
# Suffix appended to a fork's title when the fork does not supply one.
fork_title_suffix = " (fork)"

# Mutations (like, update, fork) of soft-deleted posts:
#   "reject" = fail with a post-deleted error (default)
#   "allow"  = apply the mutation anyway
deleted_posts = "reject"

[limits]
max_title_bytes = 512
max_content_bytes = 1048576
max_tags = 64
max_tag_bytes = 64
"#
    }

    /// Write the default config file into `dir` if it does not exist yet.
    ///
    /// Returns the path of the config file either way.
    pub fn write_default_if_missing(dir: &Path) -> Result<PathBuf, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            std::fs::write(&path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
        }
        Ok(path)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
