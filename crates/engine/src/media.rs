//! Media attachment binder
//!
//! Turns raw uploads into a [`MediaBundle`]. The binder never inspects
//! bytes itself: cover analysis is delegated to a [`MediaAnalyzer`] supplied
//! by the caller, invoked once per bind when there is a cover to analyze.
//!
//! Binding happens before the post store is touched, so expensive analysis
//! never runs while the store lock is held.

use branchblog_core::{Blob, CoverAnalysis, CoverDescriptor, MediaBundle};
use tracing::debug;

/// External media-analysis collaborator
pub trait MediaAnalyzer: Send + Sync {
    /// Analyze the cover image
    fn analyze(&self, cover: &Blob) -> CoverAnalysis;
}

impl<F> MediaAnalyzer for F
where
    F: Fn(&Blob) -> CoverAnalysis + Send + Sync,
{
    fn analyze(&self, cover: &Blob) -> CoverAnalysis {
        self(cover)
    }
}

/// Analyzer that reports no colour and no tags
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalyzer;

impl MediaAnalyzer for NoopAnalyzer {
    fn analyze(&self, _cover: &Blob) -> CoverAnalysis {
        CoverAnalysis::default()
    }
}

/// Raw uploaded payloads for one post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaUpload {
    /// Images in upload order; the first is the cover
    pub images: Vec<Blob>,
    /// Optional audio
    pub audio: Option<Blob>,
    /// Optional video
    pub video: Option<Blob>,
}

impl MediaUpload {
    /// Empty upload
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append an image
    pub fn image(mut self, blob: Blob) -> Self {
        self.images.push(blob);
        self
    }

    /// Builder: set audio
    pub fn audio(mut self, blob: Blob) -> Self {
        self.audio = Some(blob);
        self
    }

    /// Builder: set video
    pub fn video(mut self, blob: Blob) -> Self {
        self.video = Some(blob);
        self
    }

    /// True if nothing was uploaded
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.audio.is_none() && self.video.is_none()
    }
}

/// Bind an upload into a media bundle
///
/// The first image becomes the cover and is analyzed exactly once; the
/// analysis is stored verbatim. All images are kept in order.
pub fn bind(upload: MediaUpload, analyzer: &dyn MediaAnalyzer) -> MediaBundle {
    let cover = upload.images.first().map(|image| CoverDescriptor {
        image: image.clone(),
        analysis: analyzer.analyze(image),
    });

    debug!(
        target: "branchblog::media",
        images = upload.images.len(),
        audio = upload.audio.is_some(),
        video = upload.video.is_some(),
        "Bound media upload"
    );

    MediaBundle {
        cover,
        images: upload.images,
        audio: upload.audio,
        video: upload.video,
    }
}

/// Bind an optional upload; absent or empty uploads bind to `None`
pub fn bind_optional(
    upload: Option<MediaUpload>,
    analyzer: &dyn MediaAnalyzer,
) -> Option<MediaBundle> {
    upload
        .filter(|u| !u.is_empty())
        .map(|u| bind(u, analyzer))
}
