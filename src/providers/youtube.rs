use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ThumbnailQuality;

/// The four recognized YouTube URL shapes: `watch?v=`, `youtu.be/`,
/// `/embed/`, `/v/`. Video ids are always 11 characters.
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})")
        .unwrap()
});

/// Extract the 11-character video id from any of the recognized URL shapes.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE.captures(url).map(|caps| caps[1].to_string())
}

/// Embeddable player URL for a video id, usable as an `<iframe>` source.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// Thumbnail URL at the given quality. Pure string template, no I/O.
pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!(
        "https://img.youtube.com/vi/{video_id}/{}",
        quality.suffix()
    )
}
