use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use url::Url;

use crate::config::LinkConfig;
use crate::error::LinkError;
use crate::models::{LinkResult, MediaKind, ThumbnailQuality};
use crate::providers::{drive, vimeo, youtube};

/// Hosts trusted to serve direct image links as-is. A bare domain also
/// admits its subdomains (`i.imgur.com`, `images.unsplash.com`,
/// `res.cloudinary.com`).
const IMAGE_HOST_ALLOWLIST: &[&str] = &[
    "imgur.com",
    "unsplash.com",
    "cloudinary.com",
    "googleusercontent.com",
];

/// Direct image link: URL path ends in a known image file extension.
static IMAGE_EXTENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpe?g|png|gif|webp|svg)$").unwrap());

// ── Public helpers ─────────────────────────────────────────────────────────

/// Returns `true` if `host` is covered by the direct-image allow-list.
pub fn is_allowlisted_image_host(host: &str) -> bool {
    IMAGE_HOST_ALLOWLIST.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

// ── Validator ──────────────────────────────────────────────────────────────

/// Classifies raw user-submitted media links and rewrites them into
/// directly embeddable URLs.
///
/// Holds the HTTP client used for the Vimeo thumbnail lookup and the image
/// reachability probe; everything else is pure string work. Concurrent
/// validations share nothing mutable, so a single validator can be cloned
/// freely across tasks.
#[derive(Clone)]
pub struct MediaLinkValidator {
    client: Client,
    config: LinkConfig,
}

impl Default for MediaLinkValidator {
    fn default() -> Self {
        MediaLinkValidator::new(LinkConfig::default())
    }
}

impl MediaLinkValidator {
    pub fn new(config: LinkConfig) -> Self {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = ?e, "Failed to build configured HTTP client, using default");
                Client::new()
            });
        MediaLinkValidator { client, config }
    }

    /// Classify a submitted image link. No network call.
    ///
    /// Drive share links are rewritten to their direct-view form; other
    /// links are accepted unchanged when the host is allow-listed or the
    /// path carries an image extension.
    pub fn classify_image(&self, url: &str) -> LinkResult {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return LinkResult::invalid(LinkError::RequiredField);
        }

        // Most specific first: a Drive share link would also pass the plain
        // URL checks below, but must be rewritten rather than kept as-is.
        if let Some(file_id) = drive::extract_file_id(trimmed) {
            return LinkResult::valid(MediaKind::Image, drive::direct_image_url(&file_id), None);
        }

        let parsed = match Url::parse(trimmed) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            _ => return LinkResult::invalid(LinkError::InvalidImageUrl),
        };

        let host_allowed = parsed
            .host_str()
            .is_some_and(is_allowlisted_image_host);

        if host_allowed || IMAGE_EXTENSION_RE.is_match(parsed.path()) {
            return LinkResult::valid(MediaKind::Image, trimmed.to_string(), None);
        }

        LinkResult::invalid(LinkError::InvalidImageUrl)
    }

    /// Classify a submitted video link.
    ///
    /// YouTube is tried first, then Vimeo. Only the Vimeo thumbnail lookup
    /// touches the network, and its failure leaves the link valid with no
    /// preview.
    pub async fn classify_video(&self, url: &str) -> LinkResult {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return LinkResult::invalid(LinkError::RequiredField);
        }

        if let Some(id) = youtube::extract_video_id(trimmed) {
            let thumbnail = youtube::thumbnail_url(&id, ThumbnailQuality::default());
            return LinkResult::valid(MediaKind::Youtube, youtube::embed_url(&id), Some(thumbnail));
        }

        if let Some(id) = vimeo::extract_video_id(trimmed) {
            let thumbnail =
                vimeo::fetch_thumbnail(&self.client, &self.config.vimeo_api_base, &id).await;
            return LinkResult::valid(MediaKind::Vimeo, vimeo::embed_url(&id), thumbnail);
        }

        LinkResult::invalid(LinkError::InvalidVideoUrl)
    }

    /// Best-effort probe that an image URL actually loads.
    ///
    /// Races the request against the configured deadline; timeouts,
    /// transport errors, non-success statuses, and explicit non-image
    /// content types all count as unreachable. Never returns an error.
    pub async fn verify_image_reachable(&self, url: &str) -> bool {
        // The client-level timeout is tuned for the metadata fetch; the
        // probe gets its own, longer deadline enforced by the race below.
        let request = self
            .client
            .get(url)
            .timeout(self.config.probe_timeout)
            .send();
        let response = match tokio::time::timeout(self.config.probe_timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                tracing::debug!(error = ?e, url = %url, "Image probe failed");
                return false;
            }
            Err(_) => {
                tracing::debug!(url = %url, "Image probe timed out");
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), url = %url, "Image probe rejected");
            return false;
        }

        // A missing Content-Type header is tolerated; an explicit non-image
        // type is not.
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("image/"))
            .unwrap_or(true)
    }

    /// Classify an image link, then confirm it is reachable.
    ///
    /// A syntactically valid URL that fails the probe is downgraded to
    /// invalid so the form can tell the user to re-check sharing
    /// permissions.
    pub async fn classify_and_probe_image(&self, url: &str) -> LinkResult {
        let result = self.classify_image(url);
        if !result.is_valid {
            return result;
        }

        let Some(normalized) = result.normalized_url.clone() else {
            return result;
        };

        if self.verify_image_reachable(&normalized).await {
            result
        } else {
            LinkResult::invalid(LinkError::ImageUnreachable)
        }
    }
}

// ── Unit tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_bare_allowlisted_domain() {
        assert!(is_allowlisted_image_host("imgur.com"));
    }

    #[test]
    fn allows_subdomain_of_allowlisted_domain() {
        assert!(is_allowlisted_image_host("i.imgur.com"));
        assert!(is_allowlisted_image_host("images.unsplash.com"));
        assert!(is_allowlisted_image_host("res.cloudinary.com"));
    }

    #[test]
    fn rejects_lookalike_domain() {
        assert!(!is_allowlisted_image_host("notimgur.com"));
        assert!(!is_allowlisted_image_host("imgur.com.evil.example"));
    }

    #[test]
    fn rejects_unknown_host() {
        assert!(!is_allowlisted_image_host("example.com"));
    }

    #[test]
    fn image_drive_link_rewritten() {
        let validator = MediaLinkValidator::default();
        let result =
            validator.classify_image("https://drive.google.com/file/d/ABC123/view?usp=sharing");
        assert!(result.is_valid);
        assert_eq!(result.kind, MediaKind::Image);
        assert_eq!(
            result.normalized_url.as_deref(),
            Some("https://lh3.googleusercontent.com/d/ABC123=s800?authuser=0")
        );
    }

    #[test]
    fn image_allowlisted_host_kept_as_is() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_image("https://i.imgur.com/abcd");
        assert!(result.is_valid);
        assert_eq!(result.normalized_url.as_deref(), Some("https://i.imgur.com/abcd"));
    }

    #[test]
    fn image_extension_accepted_on_any_host() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_image("https://example.com/photos/team.JPG?width=300");
        assert!(result.is_valid);
        assert_eq!(result.kind, MediaKind::Image);
    }

    #[test]
    fn image_input_is_trimmed() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_image("  https://example.com/a.png  ");
        assert!(result.is_valid);
        assert_eq!(result.normalized_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn image_empty_input_rejected() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_image("   ");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("This field is required"));
    }

    #[test]
    fn image_arbitrary_string_rejected() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_image("not a url");
        assert!(!result.is_valid);
        assert!(result.error.is_some());
        assert_eq!(result.kind, MediaKind::None);
    }

    #[test]
    fn image_non_http_scheme_rejected() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_image("ftp://example.com/a.png");
        assert!(!result.is_valid);
    }

    #[test]
    fn image_unlisted_host_without_extension_rejected() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_image("https://example.com/gallery");
        assert!(!result.is_valid);
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn video_youtube_short_link_classified() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_video("https://youtu.be/dQw4w9WgXcQ").await;
        assert!(result.is_valid);
        assert_eq!(result.kind, MediaKind::Youtube);
        assert_eq!(
            result.normalized_url.as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert!(result.thumbnail_url.unwrap().contains("mqdefault.jpg"));
    }

    #[tokio::test]
    async fn video_empty_input_rejected() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_video("").await;
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("This field is required"));
    }

    #[tokio::test]
    async fn video_arbitrary_string_rejected() {
        let validator = MediaLinkValidator::default();
        let result = validator.classify_video("not a url").await;
        assert!(!result.is_valid);
        assert!(result.error.is_some());
        assert_eq!(result.kind, MediaKind::None);
    }
}
