//! Report data model.
//!
//! The report is constructed field-by-field during analysis and returned
//! immutable to the caller. It serializes to a JSON object whose top-level
//! keys are exactly `url, domain, title, meta_description, og_tags,
//! twitter_tags, canonical, robots, headings, images, recommendations`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Quality status of an extracted field or tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The field meets its quality bar.
    Good,
    /// The field is present but falls outside the recommended bounds, or its
    /// presence could not be confirmed.
    Warning,
    /// The field is missing or empty.
    Error,
}

/// An extracted page field with content, measured length, and status.
///
/// Used for title, meta description, canonical, and robots. `content: None`
/// always pairs with a `warning` or `error` status, never `good`. `length`
/// is reported only for the length-scored fields (title, meta description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldResult {
    /// The extracted (trimmed) value, if present and non-empty.
    pub content: Option<String>,
    /// Character count of the trimmed value; `Some(0)` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Quality status.
    pub status: Status,
}

/// A single Open Graph or Twitter Card tag.
///
/// `content: None` always pairs with `error` status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResult {
    /// The tag's `content` attribute, if present and non-empty.
    pub content: Option<String>,
    /// `good` when present and non-empty, `error` otherwise.
    pub status: Status,
}

/// Heading texts for levels 1-3, in document order.
///
/// Blank-text headings are dropped; duplicates are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadingLists {
    /// `<h1>` texts.
    pub h1: Vec<String>,
    /// `<h2>` texts.
    pub h2: Vec<String>,
    /// `<h3>` texts.
    pub h3: Vec<String>,
}

/// Image alt-text coverage counts.
///
/// `total` always equals `with_alt + without_alt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageStats {
    /// Images carrying a non-empty `alt` attribute.
    pub with_alt: usize,
    /// Images with a missing or empty `alt` attribute.
    pub without_alt: usize,
    /// Total `<img>` elements encountered.
    pub total: usize,
}

/// The full SEO report for one analyzed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The absolute URL that was analyzed.
    pub url: String,
    /// The host component of that URL.
    pub domain: String,
    /// Title tag result.
    pub title: FieldResult,
    /// Meta description result.
    pub meta_description: FieldResult,
    /// The six fixed Open Graph tags, always all present as keys.
    pub og_tags: BTreeMap<&'static str, TagResult>,
    /// The four fixed Twitter Card tags, always all present as keys.
    pub twitter_tags: BTreeMap<&'static str, TagResult>,
    /// Canonical link result (href resolved against the page URL).
    pub canonical: FieldResult,
    /// Robots directive result.
    pub robots: FieldResult,
    /// Heading structure.
    pub headings: HeadingLists,
    /// Image alt-text coverage.
    pub images: ImageStats,
    /// Human-readable improvement recommendations, in rule-evaluation order.
    pub recommendations: Vec<String>,
}

impl FieldResult {
    /// A missing length-scored field (title, meta description).
    pub(crate) fn absent_scored(status: Status) -> Self {
        Self {
            content: None,
            length: Some(0),
            status,
        }
    }

    /// A missing unscored field (canonical, robots).
    pub(crate) fn absent(status: Status) -> Self {
        Self {
            content: None,
            length: None,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Good).unwrap(), "\"good\"");
        assert_eq!(
            serde_json::to_string(&Status::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_field_result_skips_absent_length() {
        let json = serde_json::to_value(FieldResult::absent(Status::Warning)).unwrap();
        assert!(json.get("length").is_none());
        assert_eq!(json["status"], "warning");
        assert_eq!(json["content"], serde_json::Value::Null);
    }

    #[test]
    fn test_field_result_keeps_zero_length() {
        let json = serde_json::to_value(FieldResult::absent_scored(Status::Error)).unwrap();
        assert_eq!(json["length"], 0);
    }
}
