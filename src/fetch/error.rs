// src/fetch/error.rs
// =============================================================================
// Errors that a single page fetch can produce.
//
// The crawl engine treats every variant the same way (log it, skip the
// page), but keeping them apart makes the log lines useful.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, redirect loop, ...
    #[error("network error: {0}")]
    Network(String),

    /// The server answered, but not with a 2xx status
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// The response body could not be read or decoded
    #[error("could not read response body: {0}")]
    Parse(String),
}

impl FetchError {
    // Converts a reqwest error raised while *sending* the request
    //
    // Mirrors the categories link checkers usually care about, but folds
    // them into one variant with a readable message.
    pub fn from_send(error: reqwest::Error) -> Self {
        let error_string = error.to_string();

        let message = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_redirect() {
            "too many redirects".to_string()
        } else if error.is_connect() {
            if error_string.contains("dns") {
                "could not resolve hostname".to_string()
            } else {
                format!("connection failed ({})", error_string)
            }
        } else {
            error_string
        };

        FetchError::Network(message)
    }

    // Converts a reqwest error raised while reading the body
    //
    // A timeout while streaming the body is still a network problem.
    pub fn from_body(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Network("request timed out".to_string())
        } else {
            FetchError::Parse(error.to_string())
        }
    }
}
