// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only window onto the network.
//
// Submodules:
// - error: The three ways a fetch can fail (network, HTTP status, body)
// - http: The real fetcher, built on reqwest
//
// The crawl engine never talks to reqwest directly. It only knows about the
// `Fetcher` trait below, which is what lets the tests swap in an in-memory
// fetcher that records every URL it was asked for.
//
// Rust concepts:
// - Traits: Shared behaviour that different types can implement
// - async-trait: Async methods on a trait (needed for `dyn Fetcher`)
// =============================================================================

mod error;
mod http;

pub use error::FetchError;
pub use http::{FetchConfig, HttpFetcher, DEFAULT_USER_AGENT};

use async_trait::async_trait;

// Retrieves the body of a page.
//
// Headers, timeout and redirect policy are fixed when the fetcher is built,
// so a single call only needs the URL. A failure is reported as a
// FetchError value; it is never a reason to abort the whole crawl.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Lets a shared fetcher be handed to a crawler while the caller keeps a
// handle on it
#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for std::sync::Arc<T> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}
