//! Document structure rules: headings and image alt coverage.

use std::sync::LazyLock;

use scraper::Selector;

use crate::report::{HeadingLists, ImageStats};
use crate::utils::parse_selector_unsafe;

use super::document::PageDocument;

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h1", "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h2", "H2_SELECTOR"));
static H3_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h3", "H3_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));

fn non_blank(texts: Vec<String>) -> Vec<String> {
    texts.into_iter().filter(|text| !text.is_empty()).collect()
}

/// Extracts heading texts for levels 1-3 in document order.
///
/// Blank headings are dropped; duplicates are retained. Zero `<h1>` elements
/// and more than one `<h1>` element each trigger a recommendation.
pub fn extract_headings(
    document: &PageDocument,
    recommendations: &mut Vec<String>,
) -> HeadingLists {
    let headings = HeadingLists {
        h1: non_blank(document.all_texts(&H1_SELECTOR)),
        h2: non_blank(document.all_texts(&H2_SELECTOR)),
        h3: non_blank(document.all_texts(&H3_SELECTOR)),
    };

    if headings.h1.is_empty() {
        recommendations.push("Add an H1 heading to your page".to_string());
    } else if headings.h1.len() > 1 {
        recommendations.push(
            "Your page has multiple H1 headings, consider using only one for better SEO"
                .to_string(),
        );
    }

    headings
}

/// Counts `<img>` elements and their alt-text coverage.
///
/// An image counts as `with_alt` only when its `alt` attribute is present
/// and non-blank. Any uncovered images trigger a recommendation embedding
/// the exact count.
pub fn count_images(document: &PageDocument, recommendations: &mut Vec<String>) -> ImageStats {
    let alts = document.all_attrs(&IMG_SELECTOR, "alt");
    let total = alts.len();
    let with_alt = alts
        .iter()
        .filter(|alt| alt.as_deref().is_some_and(|value| !value.trim().is_empty()))
        .count();
    let without_alt = total - with_alt;

    if without_alt > 0 {
        recommendations.push(format!(
            "Add alt text to {without_alt} images for better accessibility and SEO"
        ));
    }

    ImageStats {
        with_alt,
        without_alt,
        total,
    }
}
