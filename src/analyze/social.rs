//! Social-sharing tag extraction: Open Graph and Twitter Cards.
//!
//! Each tag in the fixed key sets is extracted independently; a missing or
//! empty tag still appears in the report as an error-status entry, so the
//! maps always carry exactly their known keys.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::Selector;

use crate::config::{
    ESSENTIAL_OPEN_GRAPH_TAGS, ESSENTIAL_TWITTER_CARD_TAGS, OPEN_GRAPH_TAGS, TWITTER_CARD_TAGS,
};
use crate::report::{Status, TagResult};
use crate::utils::parse_selector_unsafe;

use super::document::PageDocument;

static OPEN_GRAPH_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    OPEN_GRAPH_TAGS
        .iter()
        .map(|key| {
            (
                *key,
                parse_selector_unsafe(&format!("meta[property='{key}']"), "OPEN_GRAPH_SELECTORS"),
            )
        })
        .collect()
});

static TWITTER_CARD_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    TWITTER_CARD_TAGS
        .iter()
        .map(|key| {
            (
                *key,
                parse_selector_unsafe(&format!("meta[name='{key}']"), "TWITTER_CARD_SELECTORS"),
            )
        })
        .collect()
});

/// Extracts one fixed key set of meta tags.
///
/// Runs the presence/emptiness rule per key, then appends a recommendation
/// for each essential key that came back empty, in the essential list's
/// order.
fn extract_tag_set(
    document: &PageDocument,
    selectors: &[(&'static str, Selector)],
    essential: &[&'static str],
    recommendation: impl Fn(&str) -> String,
    recommendations: &mut Vec<String>,
) -> BTreeMap<&'static str, TagResult> {
    let mut tags = BTreeMap::new();

    for (key, selector) in selectors {
        let content = document
            .first_attr(selector, "content")
            .filter(|content| !content.is_empty());
        let status = if content.is_some() {
            Status::Good
        } else {
            Status::Error
        };
        tags.insert(*key, TagResult { content, status });
    }

    for key in essential {
        if tags[key].content.is_none() {
            recommendations.push(recommendation(key));
        }
    }

    tags
}

/// Extracts the six fixed Open Graph tags (`og:title`, `og:description`,
/// `og:image`, `og:url`, `og:type`, `og:site_name`).
///
/// Missing or empty `og:title`, `og:description`, and `og:image` each
/// trigger a distinct recommendation.
pub fn extract_open_graph(
    document: &PageDocument,
    recommendations: &mut Vec<String>,
) -> BTreeMap<&'static str, TagResult> {
    extract_tag_set(
        document,
        OPEN_GRAPH_SELECTORS.as_slice(),
        ESSENTIAL_OPEN_GRAPH_TAGS,
        |key| format!("Add {key} meta tag for better social sharing"),
        recommendations,
    )
}

/// Extracts the four fixed Twitter Card tags (`twitter:card`,
/// `twitter:title`, `twitter:description`, `twitter:image`).
///
/// Missing or empty `twitter:card` and `twitter:title` each trigger a
/// distinct recommendation.
pub fn extract_twitter_cards(
    document: &PageDocument,
    recommendations: &mut Vec<String>,
) -> BTreeMap<&'static str, TagResult> {
    extract_tag_set(
        document,
        TWITTER_CARD_SELECTORS.as_slice(),
        ESSENTIAL_TWITTER_CARD_TAGS,
        |key| format!("Add {key} meta tag for better Twitter sharing"),
        recommendations,
    )
}
