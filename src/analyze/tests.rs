//! Analyze module tests.

use super::*;
use crate::report::Status;
use url::Url;

fn page_url() -> Url {
    Url::parse("https://example.com/dir/").unwrap()
}

fn analyze(html: &str) -> crate::report::Report {
    analyze_document(html, &page_url())
}

// --- title ---

#[test]
fn test_title_good() {
    let report = analyze("<html><head><title>A Perfectly Good Title</title></head></html>");
    assert_eq!(report.title.status, Status::Good);
    assert_eq!(report.title.content.as_deref(), Some("A Perfectly Good Title"));
    assert_eq!(report.title.length, Some(22));
    assert!(!report
        .recommendations
        .iter()
        .any(|r| r.contains("title tag")));
}

#[test]
fn test_title_short_is_warning_not_absent() {
    // "Home" is present, just too short - must not be reported as missing
    let report = analyze("<html><head><title>Home</title></head></html>");
    assert_eq!(report.title.status, Status::Warning);
    assert_eq!(report.title.length, Some(4));
    assert!(report
        .recommendations
        .contains(&"Your title tag is too short (less than 10 characters)".to_string()));
    assert!(!report
        .recommendations
        .contains(&"Add a title tag to your page".to_string()));
}

#[test]
fn test_title_long() {
    let long_title = "x".repeat(61);
    let report = analyze(&format!("<title>{long_title}</title>"));
    assert_eq!(report.title.status, Status::Warning);
    assert_eq!(report.title.length, Some(61));
    assert!(report
        .recommendations
        .contains(&"Your title tag is too long (more than 60 characters)".to_string()));
}

#[test]
fn test_title_boundary_lengths_are_good() {
    let report = analyze(&format!("<title>{}</title>", "x".repeat(10)));
    assert_eq!(report.title.status, Status::Good);
    let report = analyze(&format!("<title>{}</title>", "x".repeat(60)));
    assert_eq!(report.title.status, Status::Good);
}

#[test]
fn test_title_missing_is_error_not_short() {
    let report = analyze("<html><head></head><body></body></html>");
    assert_eq!(report.title.status, Status::Error);
    assert_eq!(report.title.content, None);
    assert_eq!(report.title.length, Some(0));
    assert!(report
        .recommendations
        .contains(&"Add a title tag to your page".to_string()));
    assert!(!report
        .recommendations
        .iter()
        .any(|r| r.contains("too short")));
}

#[test]
fn test_title_whitespace_only_is_error() {
    let report = analyze("<title>   \n\t  </title>");
    assert_eq!(report.title.status, Status::Error);
    assert_eq!(report.title.content, None);
}

#[test]
fn test_title_entities_decoded() {
    let report = analyze("<title>Rust &amp; Cargo tips</title>");
    assert_eq!(report.title.content.as_deref(), Some("Rust & Cargo tips"));
}

// --- meta description ---

#[test]
fn test_meta_description_good() {
    let html = r#"<meta name="description" content="This description is long enough to satisfy the fifty character minimum.">"#;
    let report = analyze(html);
    assert_eq!(report.meta_description.status, Status::Good);
    assert_eq!(report.meta_description.length, Some(71));
}

#[test]
fn test_meta_description_short() {
    let report = analyze(r#"<meta name="description" content="Too short.">"#);
    assert_eq!(report.meta_description.status, Status::Warning);
    assert!(report
        .recommendations
        .contains(&"Your meta description is too short (less than 50 characters)".to_string()));
}

#[test]
fn test_meta_description_long() {
    let html = format!(
        r#"<meta name="description" content="{}">"#,
        "x".repeat(161)
    );
    let report = analyze(&html);
    assert_eq!(report.meta_description.status, Status::Warning);
    assert!(report
        .recommendations
        .contains(&"Your meta description is too long (more than 160 characters)".to_string()));
}

#[test]
fn test_meta_description_empty_content_is_error() {
    let report = analyze(r#"<meta name="description" content="">"#);
    assert_eq!(report.meta_description.status, Status::Error);
    assert_eq!(report.meta_description.content, None);
    assert!(report
        .recommendations
        .contains(&"Add a meta description to your page".to_string()));
}

// --- Open Graph / Twitter tags ---

#[test]
fn test_og_tags_fixed_key_set_on_empty_document() {
    let report = analyze("<html></html>");
    let keys: Vec<&str> = report.og_tags.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            "og:description",
            "og:image",
            "og:site_name",
            "og:title",
            "og:type",
            "og:url"
        ]
    );
    assert!(report
        .og_tags
        .values()
        .all(|tag| tag.status == Status::Error && tag.content.is_none()));
}

#[test]
fn test_og_tags_present() {
    let html = r#"
        <meta property="og:title" content="Share Title">
        <meta property="og:description" content="Share description">
        <meta property="og:image" content="https://example.com/img.png">
    "#;
    let report = analyze(html);
    assert_eq!(
        report.og_tags["og:title"].content.as_deref(),
        Some("Share Title")
    );
    assert_eq!(report.og_tags["og:title"].status, Status::Good);
    // Non-essential tags still appear as error entries
    assert_eq!(report.og_tags["og:type"].status, Status::Error);
    // No og recommendations when the essential three are present
    assert!(!report.recommendations.iter().any(|r| r.contains("og:")));
}

#[test]
fn test_og_empty_content_is_error_with_recommendation() {
    let report = analyze(r#"<meta property="og:title" content="">"#);
    assert_eq!(report.og_tags["og:title"].status, Status::Error);
    assert!(report
        .recommendations
        .contains(&"Add og:title meta tag for better social sharing".to_string()));
}

#[test]
fn test_twitter_tags_fixed_key_set() {
    let report = analyze("<html></html>");
    let keys: Vec<&str> = report.twitter_tags.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            "twitter:card",
            "twitter:description",
            "twitter:image",
            "twitter:title"
        ]
    );
}

#[test]
fn test_twitter_recommendations_only_for_card_and_title() {
    let html = r#"
        <meta name="twitter:card" content="summary">
        <meta name="twitter:title" content="Tweet Title">
    "#;
    let report = analyze(html);
    assert!(!report
        .recommendations
        .iter()
        .any(|r| r.contains("twitter:")));

    let report = analyze("<html></html>");
    let twitter_recs: Vec<&String> = report
        .recommendations
        .iter()
        .filter(|r| r.contains("twitter:"))
        .collect();
    assert_eq!(
        twitter_recs,
        vec![
            "Add twitter:card meta tag for better Twitter sharing",
            "Add twitter:title meta tag for better Twitter sharing"
        ]
    );
}

// --- canonical ---

#[test]
fn test_canonical_absolute() {
    let report = analyze(r#"<link rel="canonical" href="https://example.com/page">"#);
    assert_eq!(report.canonical.status, Status::Good);
    assert_eq!(
        report.canonical.content.as_deref(),
        Some("https://example.com/page")
    );
    assert_eq!(report.canonical.length, None);
}

#[test]
fn test_canonical_relative_resolves_against_page_url() {
    // Page is at https://example.com/dir/
    let report = analyze(r#"<link rel="canonical" href="/page">"#);
    assert_eq!(
        report.canonical.content.as_deref(),
        Some("https://example.com/page")
    );
}

#[test]
fn test_canonical_protocol_relative() {
    let report = analyze(r#"<link rel="canonical" href="//cdn.example.com/page">"#);
    assert_eq!(
        report.canonical.content.as_deref(),
        Some("https://cdn.example.com/page")
    );
}

#[test]
fn test_canonical_missing_or_empty_is_error() {
    for html in ["<html></html>", r#"<link rel="canonical" href="">"#] {
        let report = analyze(html);
        assert_eq!(report.canonical.status, Status::Error);
        assert!(report
            .recommendations
            .contains(&"Add a canonical URL to your page".to_string()));
    }
}

// --- robots ---

#[test]
fn test_robots_present_is_good() {
    let report = analyze(r#"<meta name="robots" content="index, follow">"#);
    assert_eq!(report.robots.status, Status::Good);
    assert_eq!(report.robots.content.as_deref(), Some("index, follow"));
    assert!(!report.recommendations.iter().any(|r| r.contains("noindex")));
}

#[test]
fn test_robots_noindex_case_insensitive() {
    let report = analyze(r#"<meta name="robots" content="NoIndex, nofollow">"#);
    assert_eq!(report.robots.status, Status::Good);
    assert!(report.recommendations.contains(
        &"Your page has a noindex directive, search engines will not index it".to_string()
    ));
}

#[test]
fn test_robots_absent_is_warning() {
    let report = analyze("<html></html>");
    assert_eq!(report.robots.status, Status::Warning);
    assert_eq!(report.robots.content, None);
}

#[test]
fn test_robots_empty_content_is_warning() {
    let report = analyze(r#"<meta name="robots" content="">"#);
    assert_eq!(report.robots.status, Status::Warning);
    assert_eq!(report.robots.content, None);
}

// --- headings ---

#[test]
fn test_headings_document_order_and_blank_dropped() {
    let html = r#"
        <h1>Main</h1>
        <h2>First section</h2>
        <h2>   </h2>
        <h2>Second section</h2>
        <h3>Detail</h3>
    "#;
    let report = analyze(html);
    assert_eq!(report.headings.h1, vec!["Main"]);
    assert_eq!(report.headings.h2, vec!["First section", "Second section"]);
    assert_eq!(report.headings.h3, vec!["Detail"]);
}

#[test]
fn test_headings_zero_h1() {
    let report = analyze("<h2>Only a subheading</h2>");
    assert!(report.headings.h1.is_empty());
    assert!(report
        .recommendations
        .contains(&"Add an H1 heading to your page".to_string()));
}

#[test]
fn test_headings_multiple_h1() {
    let report = analyze("<h1>One</h1><h1>Two</h1>");
    assert_eq!(report.headings.h1, vec!["One", "Two"]);
    assert!(report.recommendations.contains(
        &"Your page has multiple H1 headings, consider using only one for better SEO".to_string()
    ));
}

#[test]
fn test_headings_duplicates_retained() {
    let report = analyze("<h2>Same</h2><h2>Same</h2>");
    assert_eq!(report.headings.h2, vec!["Same", "Same"]);
}

// --- images ---

#[test]
fn test_images_counts_and_invariant() {
    let html = r#"
        <img src="a.png" alt="A picture">
        <img src="b.png" alt="">
        <img src="c.png">
    "#;
    let report = analyze(html);
    assert_eq!(report.images.total, 3);
    assert_eq!(report.images.with_alt, 1);
    assert_eq!(report.images.without_alt, 2);
    assert_eq!(
        report.images.with_alt + report.images.without_alt,
        report.images.total
    );
    assert!(report
        .recommendations
        .contains(&"Add alt text to 2 images for better accessibility and SEO".to_string()));
}

#[test]
fn test_images_all_covered_no_recommendation() {
    let report = analyze(r#"<img src="a.png" alt="A"><img src="b.png" alt="B">"#);
    assert_eq!(report.images.without_alt, 0);
    assert!(!report.recommendations.iter().any(|r| r.contains("alt text")));
}

#[test]
fn test_images_none() {
    let report = analyze("<html><body><p>No images</p></body></html>");
    assert_eq!(report.images.total, 0);
    assert_eq!(report.images.with_alt, 0);
    assert_eq!(report.images.without_alt, 0);
}

// --- presence checks ---

#[test]
fn test_viewport_presence() {
    let with = analyze(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    assert!(!with.recommendations.iter().any(|r| r.contains("viewport")));

    let without = analyze("<html></html>");
    assert!(without
        .recommendations
        .contains(&"Add a meta viewport tag for better mobile compatibility".to_string()));
}

#[test]
fn test_viewport_empty_content_still_counts() {
    // Presence of the tag satisfies the check regardless of content
    let report = analyze(r#"<meta name="viewport" content="">"#);
    assert!(!report.recommendations.iter().any(|r| r.contains("viewport")));
}

#[test]
fn test_structured_data_presence() {
    let with = analyze(r#"<script type="application/ld+json">{"@type": "WebPage"}</script>"#);
    assert!(!with
        .recommendations
        .iter()
        .any(|r| r.contains("structured data")));

    let without = analyze("<script>var x = 1;</script>");
    assert!(without.recommendations.contains(
        &"Consider adding schema.org structured data for rich snippets in search results"
            .to_string()
    ));
}

#[test]
fn test_favicon_rel_variants() {
    for html in [
        r#"<link rel="icon" href="/favicon.ico">"#,
        r#"<link rel="shortcut icon" href="/favicon.ico">"#,
        r#"<link rel="apple-touch-icon" href="/touch.png">"#,
        r#"<link rel="ICON" href="/favicon.ico">"#,
    ] {
        let report = analyze(html);
        assert!(
            !report.recommendations.iter().any(|r| r.contains("favicon")),
            "rel variant should count as favicon: {html}"
        );
    }
}

#[test]
fn test_favicon_absent() {
    let report = analyze(r#"<link rel="stylesheet" href="/style.css">"#);
    assert!(report
        .recommendations
        .contains(&"Add a favicon to your website".to_string()));
}

// --- report assembly ---

#[test]
fn test_bare_page_recommendation_order() {
    let report = analyze("<html><head></head><body></body></html>");
    assert_eq!(
        report.recommendations,
        vec![
            "Add a title tag to your page",
            "Add a meta description to your page",
            "Add og:title meta tag for better social sharing",
            "Add og:description meta tag for better social sharing",
            "Add og:image meta tag for better social sharing",
            "Add twitter:card meta tag for better Twitter sharing",
            "Add twitter:title meta tag for better Twitter sharing",
            "Add a canonical URL to your page",
            "Add an H1 heading to your page",
            "Add a meta viewport tag for better mobile compatibility",
            "Consider adding schema.org structured data for rich snippets in search results",
            "Add a favicon to your website",
        ]
    );
}

#[test]
fn test_healthy_page_has_no_recommendations() {
    let html = r#"<!DOCTYPE html>
<html>
<head>
    <title>A Perfectly Good Title</title>
    <meta name="description" content="This description is long enough to satisfy the fifty character minimum.">
    <meta property="og:title" content="Share Title">
    <meta property="og:description" content="Share description">
    <meta property="og:image" content="https://example.com/img.png">
    <meta property="og:url" content="https://example.com/dir/">
    <meta property="og:type" content="website">
    <meta property="og:site_name" content="Example">
    <meta name="twitter:card" content="summary">
    <meta name="twitter:title" content="Tweet Title">
    <meta name="twitter:description" content="Tweet description">
    <meta name="twitter:image" content="https://example.com/img.png">
    <link rel="canonical" href="https://example.com/dir/">
    <meta name="robots" content="index, follow">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <script type="application/ld+json">{"@type": "WebPage"}</script>
    <link rel="icon" href="/favicon.ico">
</head>
<body>
    <h1>The Only Heading</h1>
    <img src="hero.png" alt="Hero image">
</body>
</html>"#;
    let report = analyze(html);
    assert_eq!(report.recommendations, Vec::<String>::new());
    assert_eq!(report.url, "https://example.com/dir/");
    assert_eq!(report.domain, "example.com");
}

#[test]
fn test_analysis_is_total_on_garbage_input() {
    for html in ["", "<<<>>>", "not html at all", "<html><body><div"] {
        let report = analyze(html);
        assert_eq!(report.og_tags.len(), 6);
        assert_eq!(report.twitter_tags.len(), 4);
        assert_eq!(report.title.status, Status::Error);
    }
}
