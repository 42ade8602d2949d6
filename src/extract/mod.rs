// src/extract/mod.rs
// =============================================================================
// This module pulls the references a crawler cares about out of a page.
//
// Submodules:
// - html: Anchor hrefs and script srcs from an HTML document
//
// Extraction returns the raw attribute values, in document order. Turning
// them into absolute URLs is the crawl engine's job because it depends on
// the origin of the page being crawled.
// =============================================================================

mod html;

pub use html::extract_page;
