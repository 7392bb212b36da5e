//! Queryable page document.
//!
//! Wraps the parsed HTML tree behind a small query capability (first/all
//! element text and attribute lookup, element presence) so the extraction
//! rules never depend on the parser's element model directly.

use scraper::{Html, Selector};

/// A parsed HTML document, queryable but never mutated.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses raw HTML permissively.
    ///
    /// Malformed markup never fails: the parser recovers and missing or
    /// malformed tags simply come back as absent in queries.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Text content of the first element matching `selector`, trimmed.
    ///
    /// Collects nested text nodes, so HTML entities and inline markup inside
    /// the element are handled correctly.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.html
            .select(selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }

    /// Value of `attr` on the first element matching `selector`, trimmed.
    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.html
            .select(selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(|value| value.trim().to_string())
    }

    /// Trimmed text of every element matching `selector`, in document order.
    pub fn all_texts(&self, selector: &Selector) -> Vec<String> {
        self.html
            .select(selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// Value of `attr` for every element matching `selector`, in document
    /// order; `None` where the attribute is missing.
    pub fn all_attrs(&self, selector: &Selector, attr: &str) -> Vec<Option<String>> {
        self.html
            .select(selector)
            .map(|element| element.value().attr(attr).map(str::to_string))
            .collect()
    }

    /// Whether any element matches `selector`.
    pub fn has_any(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }
}
