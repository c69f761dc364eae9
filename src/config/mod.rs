use std::env;
use std::time::Duration;

/// Timeout for the Vimeo thumbnail metadata request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Deadline for the image reachability probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_VIMEO_API_BASE: &str = "https://vimeo.com/api/v2";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; WomenConnectLinkBot/1.0; +https://womenconnecthub.org)";

/// Settings for outbound requests made during link validation.
///
/// Built once at startup and handed to
/// [`MediaLinkValidator::new`](crate::validator::MediaLinkValidator::new);
/// never reinitialized. `vimeo_api_base` is overridable so tests can point
/// the thumbnail lookup at a closed local port.
#[derive(Clone, Debug)]
pub struct LinkConfig {
    pub fetch_timeout: Duration,
    pub probe_timeout: Duration,
    pub vimeo_api_base: String,
    pub user_agent: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        LinkConfig {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            vimeo_api_base: DEFAULT_VIMEO_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl LinkConfig {
    /// Build a config from `EMBEDLINK_*` environment overrides.
    ///
    /// Every variable is optional; missing or unparseable values keep their
    /// defaults.
    pub fn from_env() -> Self {
        LinkConfig {
            fetch_timeout: env_secs("EMBEDLINK_FETCH_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_FETCH_TIMEOUT),
            probe_timeout: env_secs("EMBEDLINK_PROBE_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_PROBE_TIMEOUT),
            vimeo_api_base: env::var("EMBEDLINK_VIMEO_API_BASE")
                .unwrap_or_else(|_| DEFAULT_VIMEO_API_BASE.to_string()),
            user_agent: env::var("EMBEDLINK_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

fn env_secs(key: &str) -> Option<Duration> {
    env::var(key).ok()?.parse().ok().map(Duration::from_secs)
}
