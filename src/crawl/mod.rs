// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Each URL fetched at most once per run, even on failure
// - Configurable depth limit (the seed is depth 1)
// - Links sorted into subdomains, same-origin links and scripts
//
// Submodules:
// - classify: Origin computation and the link classification rules
// - engine: The traversal itself
// - result: The read-only report a run produces
// - error: Invalid seed / depth
// =============================================================================

mod classify;
mod engine;
mod error;
mod result;

pub use engine::{Crawler, ProgressCallback};
pub use result::CrawlReport;
