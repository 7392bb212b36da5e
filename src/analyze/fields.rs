//! Scalar field extraction rules: title, meta description, canonical, robots.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;
use url::Url;

use crate::config::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::report::{FieldResult, Status};
use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

use super::document::PageDocument;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const ROBOTS_SELECTOR_STR: &str = "meta[name='robots']";

const NOINDEX_PATTERN: &str = "(?i)noindex";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ROBOTS_SELECTOR_STR, "ROBOTS_SELECTOR"));

static NOINDEX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NOINDEX_PATTERN, "NOINDEX_RE"));

/// Extracts the page title from the first `<title>` element.
///
/// Lengths of 10-60 characters score `good`, anything else present scores
/// `warning`; a missing or empty tag is an `error`.
pub fn extract_title(document: &PageDocument, recommendations: &mut Vec<String>) -> FieldResult {
    match document
        .first_text(&TITLE_SELECTOR)
        .filter(|text| !text.is_empty())
    {
        Some(text) => {
            let length = text.chars().count();
            let status = if (TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
                Status::Good
            } else {
                Status::Warning
            };

            if length < TITLE_MIN_LENGTH {
                recommendations
                    .push("Your title tag is too short (less than 10 characters)".to_string());
            } else if length > TITLE_MAX_LENGTH {
                recommendations
                    .push("Your title tag is too long (more than 60 characters)".to_string());
            }

            FieldResult {
                content: Some(text),
                length: Some(length),
                status,
            }
        }
        None => {
            recommendations.push("Add a title tag to your page".to_string());
            FieldResult::absent_scored(Status::Error)
        }
    }
}

/// Extracts the meta description from `<meta name="description">`.
///
/// Lengths of 50-160 characters score `good`, anything else present scores
/// `warning`; a missing tag or empty content is an `error`.
pub fn extract_meta_description(
    document: &PageDocument,
    recommendations: &mut Vec<String>,
) -> FieldResult {
    match document
        .first_attr(&META_DESCRIPTION_SELECTOR, "content")
        .filter(|content| !content.is_empty())
    {
        Some(content) => {
            let length = content.chars().count();
            let status = if (DESCRIPTION_MIN_LENGTH..=DESCRIPTION_MAX_LENGTH).contains(&length) {
                Status::Good
            } else {
                Status::Warning
            };

            if length < DESCRIPTION_MIN_LENGTH {
                recommendations.push(
                    "Your meta description is too short (less than 50 characters)".to_string(),
                );
            } else if length > DESCRIPTION_MAX_LENGTH {
                recommendations.push(
                    "Your meta description is too long (more than 160 characters)".to_string(),
                );
            }

            FieldResult {
                content: Some(content),
                length: Some(length),
                status,
            }
        }
        None => {
            recommendations.push("Add a meta description to your page".to_string());
            FieldResult::absent_scored(Status::Error)
        }
    }
}

/// Extracts the canonical URL from `<link rel="canonical">`.
///
/// A relative href is resolved against the page URL before reporting. An
/// empty href is treated the same as a missing tag.
pub fn extract_canonical(
    document: &PageDocument,
    page_url: &Url,
    recommendations: &mut Vec<String>,
) -> FieldResult {
    match document
        .first_attr(&CANONICAL_SELECTOR, "href")
        .filter(|href| !href.is_empty())
    {
        Some(href) => {
            // Url::join handles absolute, protocol-relative, and relative hrefs
            let resolved = page_url
                .join(&href)
                .map(|resolved| resolved.to_string())
                .unwrap_or(href);

            FieldResult {
                content: Some(resolved),
                length: None,
                status: Status::Good,
            }
        }
        None => {
            recommendations.push("Add a canonical URL to your page".to_string());
            FieldResult::absent(Status::Error)
        }
    }
}

/// Extracts the robots directive from `<meta name="robots">`.
///
/// Absence (or empty content) is a `warning` rather than an `error`: not
/// having the tag is not wrong, just unconfirmed. A directive containing
/// `noindex` (case-insensitive) triggers a recommendation.
pub fn extract_robots(document: &PageDocument, recommendations: &mut Vec<String>) -> FieldResult {
    match document
        .first_attr(&ROBOTS_SELECTOR, "content")
        .filter(|content| !content.is_empty())
    {
        Some(content) => {
            if NOINDEX_RE.is_match(&content) {
                recommendations.push(
                    "Your page has a noindex directive, search engines will not index it"
                        .to_string(),
                );
            }

            FieldResult {
                content: Some(content),
                length: None,
                status: Status::Good,
            }
        }
        None => FieldResult::absent(Status::Warning),
    }
}
