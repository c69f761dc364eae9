use serde::{Deserialize, Serialize};

use crate::error::LinkError;

/// What a submitted link was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Youtube,
    Vimeo,
    /// Nothing matched (also used for blank input).
    None,
}

/// YouTube thumbnail quality, mapping to one of the four fixed filename
/// suffixes served by YouTube's thumbnail CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    Default,
    #[default]
    Medium,
    High,
    Max,
}

impl ThumbnailQuality {
    /// Filename suffix for this quality.
    pub fn suffix(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default.jpg",
            ThumbnailQuality::Medium => "mqdefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
            ThumbnailQuality::Max => "maxresdefault.jpg",
        }
    }

    /// Parse a quality string from form code.
    ///
    /// Unknown values fall back to `Medium` rather than erroring; callers
    /// pass quality strings through without validating them first.
    pub fn parse(quality: &str) -> Self {
        match quality {
            "default" => ThumbnailQuality::Default,
            "medium" => ThumbnailQuality::Medium,
            "high" => ThumbnailQuality::High,
            "max" => ThumbnailQuality::Max,
            _ => ThumbnailQuality::Medium,
        }
    }
}

/// Outcome of classifying a single submitted link.
///
/// Produced fresh per input and never mutated afterwards. A valid result
/// always carries a `normalized_url`; an `error` message is only present on
/// invalid results. Both invariants are upheld by the constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResult {
    pub is_valid: bool,
    pub kind: MediaKind,
    pub normalized_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub error: Option<String>,
}

impl LinkResult {
    pub fn valid(kind: MediaKind, normalized_url: String, thumbnail_url: Option<String>) -> Self {
        LinkResult {
            is_valid: true,
            kind,
            normalized_url: Some(normalized_url),
            thumbnail_url,
            error: None,
        }
    }

    pub fn invalid(error: LinkError) -> Self {
        LinkResult {
            is_valid: false,
            kind: MediaKind::None,
            normalized_url: None,
            thumbnail_url: None,
            error: Some(error.to_string()),
        }
    }
}
