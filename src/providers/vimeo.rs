use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

/// Numeric video id in a vimeo.com URL (`https://vimeo.com/76979871`,
/// `https://vimeo.com/video/76979871`).
static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vimeo\.com/(?:video/)?(\d+)").unwrap());

/// Extract the numeric video id from a Vimeo URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE.captures(url).map(|caps| caps[1].to_string())
}

/// Embeddable player URL for a video id, usable as an `<iframe>` source.
pub fn embed_url(video_id: &str) -> String {
    format!("https://player.vimeo.com/video/{video_id}")
}

/// Fetch the thumbnail URL for a video from Vimeo's public metadata
/// endpoint (`<api_base>/video/<id>.json`).
///
/// Returns `None` on any network failure, non-success status, or malformed
/// payload. A missing thumbnail means "no preview available", never that
/// the link itself is invalid.
pub async fn fetch_thumbnail(client: &Client, api_base: &str, video_id: &str) -> Option<String> {
    let url = format!("{api_base}/video/{video_id}.json");

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = ?e, video_id = %video_id, "Failed to fetch Vimeo metadata");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::warn!(
            status = %response.status(),
            video_id = %video_id,
            "Vimeo metadata request returned error status"
        );
        return None;
    }

    let body: serde_json::Value = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = ?e, video_id = %video_id, "Failed to parse Vimeo metadata");
            return None;
        }
    };

    // The endpoint returns a one-element array per video.
    body[0]["thumbnail_large"]
        .as_str()
        .or_else(|| body[0]["thumbnail_medium"].as_str())
        .map(|s| s.to_string())
}
