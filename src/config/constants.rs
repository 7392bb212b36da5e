//! Configuration constants.
//!
//! This module defines the configuration constants used throughout the
//! application: network timeouts, input limits, status thresholds, and the
//! fixed sets of social-sharing tags the analyzer reports on.

/// Per-request HTTP timeout in seconds.
///
/// The fetch must fail deterministically rather than hang, so the whole
/// request (connect + headers + body) is bounded by this single timeout.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// A static desktop-browser value. Sites that block unknown or bot agents
/// must still be reachable, so this identifies as a mainstream Chrome build.
/// Users can override it via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Maximum URL length (2048 characters) to prevent DoS via extremely long URLs.
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

// Status thresholds
/// Minimum title length (characters) for a `good` status.
pub const TITLE_MIN_LENGTH: usize = 10;
/// Maximum title length (characters) for a `good` status.
pub const TITLE_MAX_LENGTH: usize = 60;
/// Minimum meta description length (characters) for a `good` status.
pub const DESCRIPTION_MIN_LENGTH: usize = 50;
/// Maximum meta description length (characters) for a `good` status.
pub const DESCRIPTION_MAX_LENGTH: usize = 160;

// Open Graph tag keys
// These appear in the report's og_tags map whether or not the page carries them.
/// og:title property key.
pub const OG_TITLE: &str = "og:title";
/// og:description property key.
pub const OG_DESCRIPTION: &str = "og:description";
/// og:image property key.
pub const OG_IMAGE: &str = "og:image";
/// og:url property key.
pub const OG_URL: &str = "og:url";
/// og:type property key.
pub const OG_TYPE: &str = "og:type";
/// og:site_name property key.
pub const OG_SITE_NAME: &str = "og:site_name";

/// The fixed set of Open Graph tags captured per page.
/// To add/remove tags, modify this array.
pub const OPEN_GRAPH_TAGS: &[&str] = &[
    OG_TITLE,
    OG_DESCRIPTION,
    OG_IMAGE,
    OG_URL,
    OG_TYPE,
    OG_SITE_NAME,
];

/// The Open Graph tags whose absence triggers a recommendation.
pub const ESSENTIAL_OPEN_GRAPH_TAGS: &[&str] = &[OG_TITLE, OG_DESCRIPTION, OG_IMAGE];

// Twitter Card tag keys
/// twitter:card name key.
pub const TWITTER_CARD: &str = "twitter:card";
/// twitter:title name key.
pub const TWITTER_TITLE: &str = "twitter:title";
/// twitter:description name key.
pub const TWITTER_DESCRIPTION: &str = "twitter:description";
/// twitter:image name key.
pub const TWITTER_IMAGE: &str = "twitter:image";

/// The fixed set of Twitter Card tags captured per page.
/// To add/remove tags, modify this array.
pub const TWITTER_CARD_TAGS: &[&str] = &[
    TWITTER_CARD,
    TWITTER_TITLE,
    TWITTER_DESCRIPTION,
    TWITTER_IMAGE,
];

/// The Twitter Card tags whose absence triggers a recommendation.
pub const ESSENTIAL_TWITTER_CARD_TAGS: &[&str] = &[TWITTER_CARD, TWITTER_TITLE];
