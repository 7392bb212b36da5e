//! Presence-only checks: viewport, structured data, favicon.
//!
//! These rules contribute recommendations but no report field.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

use super::document::PageDocument;

const VIEWPORT_SELECTOR_STR: &str = "meta[name='viewport']";
const JSON_LD_SELECTOR_STR: &str = "script[type='application/ld+json']";
const LINK_REL_SELECTOR_STR: &str = "link[rel]";

// Matches any rel value naming an icon (icon, shortcut icon, apple-touch-icon, ...)
const ICON_REL_PATTERN: &str = "(?i)icon";

static VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(VIEWPORT_SELECTOR_STR, "VIEWPORT_SELECTOR"));
static JSON_LD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(JSON_LD_SELECTOR_STR, "JSON_LD_SELECTOR"));
static LINK_REL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINK_REL_SELECTOR_STR, "LINK_REL_SELECTOR"));

static ICON_REL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ICON_REL_PATTERN, "ICON_REL_RE"));

/// Checks for a `<meta name="viewport">` tag.
///
/// Presence alone satisfies the check; the content is not inspected.
pub fn check_viewport(document: &PageDocument, recommendations: &mut Vec<String>) {
    if !document.has_any(&VIEWPORT_SELECTOR) {
        recommendations
            .push("Add a meta viewport tag for better mobile compatibility".to_string());
    }
}

/// Checks for any `<script type="application/ld+json">` block.
pub fn check_structured_data(document: &PageDocument, recommendations: &mut Vec<String>) {
    if !document.has_any(&JSON_LD_SELECTOR) {
        recommendations.push(
            "Consider adding schema.org structured data for rich snippets in search results"
                .to_string(),
        );
    }
}

/// Checks for any `<link>` whose `rel` names an icon (case-insensitive).
pub fn check_favicon(document: &PageDocument, recommendations: &mut Vec<String>) {
    let found = document
        .all_attrs(&LINK_REL_SELECTOR, "rel")
        .iter()
        .flatten()
        .any(|rel| ICON_REL_RE.is_match(rel));

    if !found {
        recommendations.push("Add a favicon to your website".to_string());
    }
}
