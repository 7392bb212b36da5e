//! Page analysis: extraction rules and report assembly.
//!
//! Analysis is a pure, single-pass transformation from `(HTML, URL)` to a
//! [`Report`]. Each extraction rule is an independent function over the
//! parsed [`PageDocument`]; the rules run in one fixed, explicit order, and
//! that order alone determines the order of the accumulated recommendations.
//!
//! Analysis never fails: malformed markup degrades to absent fields, and the
//! report is always complete.

mod document;
mod extras;
mod fields;
mod social;
mod structure;

use url::Url;

use crate::report::Report;

pub use document::PageDocument;

/// Analyzes raw HTML and assembles the full report.
///
/// # Arguments
///
/// * `body` - The raw HTML text
/// * `url` - The absolute URL the page was fetched from (used for the
///   report's `url`/`domain` fields and for resolving a relative canonical
///   href)
pub fn analyze_document(body: &str, url: &Url) -> Report {
    let document = PageDocument::parse(body);
    let domain = url.host_str().unwrap_or_default().to_string();

    // Rule order fixes recommendation order
    let mut recommendations = Vec::new();
    let title = fields::extract_title(&document, &mut recommendations);
    let meta_description = fields::extract_meta_description(&document, &mut recommendations);
    let og_tags = social::extract_open_graph(&document, &mut recommendations);
    let twitter_tags = social::extract_twitter_cards(&document, &mut recommendations);
    let canonical = fields::extract_canonical(&document, url, &mut recommendations);
    let robots = fields::extract_robots(&document, &mut recommendations);
    let headings = structure::extract_headings(&document, &mut recommendations);
    let images = structure::count_images(&document, &mut recommendations);
    extras::check_viewport(&document, &mut recommendations);
    extras::check_structured_data(&document, &mut recommendations);
    extras::check_favicon(&document, &mut recommendations);

    Report {
        url: url.to_string(),
        domain,
        title,
        meta_description,
        og_tags,
        twitter_tags,
        canonical,
        robots,
        headings,
        images,
        recommendations,
    }
}
