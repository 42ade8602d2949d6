// src/crawl/error.rs
// =============================================================================
// Errors that stop a crawl before it starts.
//
// Once the first page has been requested nothing is fatal any more: fetch
// failures are logged and counted, never returned.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("Max depth must be at least 1 (got {0})")]
    InvalidDepth(usize),
}
