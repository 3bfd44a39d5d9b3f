//! Media attachment types
//!
//! Blobs are opaque: no format or size validation happens here. Bytes are
//! base64-encoded when serialized so posts round-trip through JSON.

use serde::{Deserialize, Serialize};

/// A named, opaque byte payload (image, audio or video)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// Original file name
    pub name: String,
    /// Raw bytes
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl Blob {
    /// Create a blob
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Blob {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// RGB colour triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Output of an external media-analysis function for a cover image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverAnalysis {
    /// Dominant colour, if the analyzer could determine one
    pub dominant_color: Option<Rgb>,
    /// Tags suggested from the image
    pub suggested_tags: Vec<String>,
}

/// Cover image plus its analysis, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverDescriptor {
    /// The cover image (first uploaded image)
    pub image: Blob,
    /// Analysis result
    pub analysis: CoverAnalysis,
}

/// Everything attached to a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBundle {
    /// Cover descriptor, present iff at least one image was attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<CoverDescriptor>,
    /// All images in upload order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Blob>,
    /// Optional audio clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Blob>,
    /// Optional video clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Blob>,
}

impl MediaBundle {
    /// Tags suggested by the cover analysis
    pub fn suggested_tags(&self) -> &[String] {
        self.cover
            .as_ref()
            .map(|c| c.analysis.suggested_tags.as_slice())
            .unwrap_or(&[])
    }

    /// Dominant colour of the cover, if any
    pub fn dominant_color(&self) -> Option<Rgb> {
        self.cover.as_ref().and_then(|c| c.analysis.dominant_color)
    }

    /// True when nothing is attached
    pub fn is_empty(&self) -> bool {
        self.cover.is_none() && self.images.is_empty() && self.audio.is_none() && self.video.is_none()
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(d)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
