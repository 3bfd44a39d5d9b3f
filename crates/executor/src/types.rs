//! Wire types used by commands and outputs.

use branchblog_core::Blob;
use branchblog_engine::MediaUpload;
use serde::{Deserialize, Serialize};

/// Media payloads carried by a create or fork command
///
/// Blob bytes travel base64-encoded in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    /// Images in upload order; the first is the cover
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Blob>,
    /// Optional audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Blob>,
    /// Optional video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Blob>,
}

impl From<Upload> for MediaUpload {
    fn from(u: Upload) -> Self {
        MediaUpload {
            images: u.images,
            audio: u.audio,
            video: u.video,
        }
    }
}

/// Store statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Posts ever created
    pub total: usize,
    /// Posts not soft-deleted
    pub live: usize,
}
