// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl traversal.
//
// How it works:
// 1. Validate the seed and push it as the first page (depth 1)
// 2. Fetch the page, extract its anchors and scripts
// 3. Walk the anchors in document order, classifying each one
// 4. A new same-origin link is crawled right away, one level deeper, and
//    its whole subtree finishes before the next anchor of the parent page
// 5. Once a page runs out of anchors, record its scripts and go back up
//
// Instead of recursing, we keep an explicit stack of page frames. Each
// frame remembers where it was in its anchor list, so the visiting order
// (and the moment each URL enters a set) is the same as a recursive
// depth-first walk, without being limited by the call stack.
//
// A URL is marked visited before it is fetched. A failed fetch therefore
// still counts as visited and is never retried.
// =============================================================================

use super::classify::{classify, Classification, Origin};
use super::error::CrawlError;
use super::result::{CrawlReport, CrawlSets};
use crate::extract::extract_page;
use crate::fetch::Fetcher;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Called with `(depth, url)` right before a page is fetched
pub type ProgressCallback = Arc<dyn Fn(usize, &str) + Send + Sync>;

// A page waiting to be crawled
#[derive(Debug, Clone)]
struct CrawlTarget {
    url: String,
    depth: usize,
}

// A fetched page whose anchors are still being walked
struct PageFrame {
    origin: Origin,
    depth: usize,
    anchors: std::vec::IntoIter<String>,
    scripts: Vec<String>,
}

// Everything mutable during one run
#[derive(Default)]
struct CrawlState {
    visited: HashSet<String>,
    sets: CrawlSets,
    pages_failed: usize,
}

pub struct Crawler<F> {
    fetcher: F,
    max_depth: usize,
    progress_callback: Option<ProgressCallback>,
}

impl<F: Fetcher> Crawler<F> {
    // Creates a crawler that only visits the seed page (max depth 1)
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            max_depth: 1,
            progress_callback: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    // Crawls from `seed` and returns the finished report
    //
    // Errors only for a bad seed URL or a max depth of 0. Fetch failures
    // along the way are logged and counted in the report.
    pub async fn run(&self, seed: &str) -> Result<CrawlReport, CrawlError> {
        // Reject bad input before anything touches the network
        if self.max_depth == 0 {
            return Err(CrawlError::InvalidDepth(self.max_depth));
        }
        let seed = normalize_seed(seed)?;

        info!(seed = %seed, max_depth = self.max_depth, "Starting crawl");

        let mut state = CrawlState::default();

        // The top of the stack is the page whose anchors we're walking.
        // Everything below it is waiting for that page's subtree to finish.
        let mut stack: Vec<PageFrame> = Vec::new();

        let target = CrawlTarget {
            url: seed.clone(),
            depth: 1,
        };
        if let Some(frame) = self.visit(&mut state, target).await {
            stack.push(frame);
        }

        // Keep going until every page's anchors are used up
        while let Some(frame) = stack.last_mut() {
            let Some(href) = frame.anchors.next() else {
                // Page finished: its scripts come after all of its anchors
                if let Some(done) = stack.pop() {
                    collect_scripts(&mut state.sets, done);
                }
                continue;
            };

            let Some(full) = frame.origin.resolve(&href) else {
                debug!(href = %href, origin = frame.origin.as_str(), "Skipping unresolvable href");
                continue;
            };

            // First match wins: the absolute-host test runs before the origin test
            match classify(&full, &frame.origin, &state.sets.subdomains, &state.sets.links) {
                Classification::Subdomain => {
                    debug!(url = %full, "  -> subdomain");
                    state.sets.subdomains.insert(full);
                }
                Classification::SameOrigin => {
                    debug!(url = %full, "  -> same origin, descending");
                    state.sets.links.insert(full.clone());

                    // Descend now; the child's frame goes on top of ours
                    let target = CrawlTarget {
                        url: full,
                        depth: frame.depth + 1,
                    };
                    if let Some(child) = self.visit(&mut state, target).await {
                        stack.push(child);
                    }
                }
                Classification::Ignored => {
                    debug!(url = %full, "  -> ignored");
                }
            }
        }

        // Hand the sets over; the report is read-only from here on
        let report = CrawlReport::new(
            seed,
            self.max_depth,
            state.visited.len(),
            state.pages_failed,
            state.sets,
        );

        info!(
            pages = report.pages_visited(),
            failed = report.pages_failed(),
            links = report.links().len(),
            subdomains = report.subdomains().len(),
            scripts = report.scripts().len(),
            "Crawl complete"
        );

        Ok(report)
    }

    // Fetches one page and turns it into a frame
    //
    // Returns None when the page is out of depth, already visited, or
    // could not be fetched. Only the last case marks anything: the URL
    // goes into `visited` before the request is made.
    async fn visit(&self, state: &mut CrawlState, target: CrawlTarget) -> Option<PageFrame> {
        // Too deep or seen before: nothing to do, and nothing is marked
        if target.depth > self.max_depth || state.visited.contains(&target.url) {
            return None;
        }

        // Mark first, so even a failed fetch is never repeated
        state.visited.insert(target.url.clone());

        if let Some(ref callback) = self.progress_callback {
            callback(target.depth, &target.url);
        }

        // Any kind of failure (network, status, body) just ends this branch
        let body = match self.fetcher.fetch(&target.url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %target.url, error = %e, "Failed to fetch page");
                state.pages_failed += 1;
                return None;
            }
        };

        // URLs reaching this point were produced by Url serialization
        let origin = match Url::parse(&target.url).ok().as_ref().and_then(Origin::of) {
            Some(origin) => origin,
            None => {
                warn!(url = %target.url, "Page URL has no origin, skipping its links");
                return None;
            }
        };

        // Copy the hrefs and srcs out now; the parsed document is dropped here
        let refs = extract_page(&body);
        debug!(
            url = %target.url,
            depth = target.depth,
            anchors = refs.anchors.len(),
            scripts = refs.scripts.len(),
            "Fetched page"
        );

        Some(PageFrame {
            origin,
            depth: target.depth,
            anchors: refs.anchors.into_iter(),
            scripts: refs.scripts,
        })
    }
}

// Resolves a finished page's scripts against its origin
fn collect_scripts(sets: &mut CrawlSets, frame: PageFrame) {
    for src in frame.scripts {
        match frame.origin.resolve(&src) {
            Some(full) => {
                sets.scripts.insert(full);
            }
            None => debug!(src = %src, "Skipping unresolvable script src"),
        }
    }
}

// Parses the seed, insists on http(s), and returns its normalized form
fn normalize_seed(seed: &str) -> Result<String, CrawlError> {
    let url = Url::parse(seed).map_err(|e| CrawlError::InvalidSeed {
        url: seed.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url.into())
}
