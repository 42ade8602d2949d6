// src/fetch/http.rs
// =============================================================================
// This module fetches web pages over HTTP.
//
// Key functionality:
// - One reqwest Client per crawl (connection pooling across all pages)
// - A browser-like User-Agent so trivial bot filters let us through
// - A per-request timeout (5 seconds by default)
// - Redirects followed by default, can be switched off
//
// Any non-2xx answer is turned into FetchError::HttpStatus, so the caller
// only ever sees a body for pages that actually loaded.
// =============================================================================

use super::{FetchError, Fetcher};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use tracing::debug;

/// A desktop Chrome User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// How many redirect hops we follow before giving up
const MAX_REDIRECTS: usize = 10;

// Settings for the HTTP fetcher
//
// Built from the command line in main.rs; tests build it by hand.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub follow_redirects: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(5),
            follow_redirects: true,
        }
    }
}

// Fetches pages with reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the underlying HTTP client from the config
    //
    // Fails if the User-Agent is not a valid header value or the TLS
    // backend cannot be set up.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let redirect = if config.follow_redirects {
            Policy::limited(MAX_REDIRECTS)
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(redirect)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(FetchError::from_body)
    }
}
