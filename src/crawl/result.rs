// src/crawl/result.rs
// =============================================================================
// The outcome of one crawl run.
//
// The engine fills the sets while it runs and hands the finished report
// back by value. From then on it is read-only: there are accessors but no
// setters. BTreeSet keeps every listing sorted, so the output of two runs
// over the same site can be diffed.
// =============================================================================

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    seed: String,
    max_depth: usize,
    pages_visited: usize,
    pages_failed: usize,
    subdomains: BTreeSet<String>,
    links: BTreeSet<String>,
    scripts: BTreeSet<String>,
}

// Everything the engine accumulates while it runs
#[derive(Debug, Default)]
pub(super) struct CrawlSets {
    pub subdomains: BTreeSet<String>,
    pub links: BTreeSet<String>,
    pub scripts: BTreeSet<String>,
}

impl CrawlReport {
    pub(super) fn new(
        seed: String,
        max_depth: usize,
        pages_visited: usize,
        pages_failed: usize,
        sets: CrawlSets,
    ) -> Self {
        Self {
            seed,
            max_depth,
            pages_visited,
            pages_failed,
            subdomains: sets.subdomains,
            links: sets.links,
            scripts: sets.scripts,
        }
    }

    /// The normalized seed URL
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of URLs a fetch was attempted for, failures included
    pub fn pages_visited(&self) -> usize {
        self.pages_visited
    }

    pub fn pages_failed(&self) -> usize {
        self.pages_failed
    }

    /// Absolute URLs with a well-formed host, same-origin ones included
    pub fn subdomains(&self) -> &BTreeSet<String> {
        &self.subdomains
    }

    /// Same-origin URLs that were scheduled for crawling
    pub fn links(&self) -> &BTreeSet<String> {
        &self.links
    }

    /// Script `src` URLs from every page that loaded
    pub fn scripts(&self) -> &BTreeSet<String> {
        &self.scripts
    }
}
