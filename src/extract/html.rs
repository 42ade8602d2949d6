// src/extract/html.rs
// =============================================================================
// This module extracts anchor and script references from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is forgiving: malformed markup still produces a document
//
// scraper's `Html` type is not Send, so we copy everything we need into
// plain Strings right away and drop the document before the next await.
// =============================================================================

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

// Both selectors are constants known to be valid
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static SCRIPT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("script[src]").unwrap());

// The references found on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRefs {
    /// `href` of every `<a>` that has one, in document order
    pub anchors: Vec<String>,
    /// `src` of every `<script>` that has one, in document order
    pub scripts: Vec<String>,
}

// Parses an HTML body and collects its anchor hrefs and script srcs
//
// Example:
//   html = "<a href='/docs'>Docs</a><script src='/app.js'></script>"
//   result = PageRefs { anchors: ["/docs"], scripts: ["/app.js"] }
pub fn extract_page(html: &str) -> PageRefs {
    let document = Html::parse_document(html);

    let anchors = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    let scripts = document
        .select(&SCRIPT_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .map(str::to_string)
        .collect();

    PageRefs { anchors, scripts }
}
