// src/crawl/classify.rs
// =============================================================================
// This module decides what the crawler does with each discovered link.
//
// Every resolved anchor ends up in exactly one of three buckets:
// - Subdomain: an absolute URL with a dotted, alphabetic-TLD host
// - SameOrigin: starts with the origin of the page it was found on
// - Ignored: everything else (other origins, mailto:, javascript:, ...)
//
// The absolute-host test runs FIRST. That means an absolute link back into
// the same site (https://example.com/page) is filed as a subdomain and is
// not crawled. Relative links resolved against a dotted host produce such
// URLs too. Only origins like `localhost` or IP literals ever reach the
// same-origin branch on a first sighting.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use url::{Position, Url};

// Anchored at the start only, like a prefix match
static ABSOLUTE_HOST_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

// Where a discovered link belongs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Subdomain,
    SameOrigin,
    Ignored,
}

// The `scheme://netloc` of a crawled page, plus a base URL to resolve
// that page's links against
#[derive(Debug, Clone)]
pub struct Origin {
    prefix: String,
    base: Url,
}

impl Origin {
    // Computes the origin of a page URL
    //
    // Returns None for URLs that have no authority (data:, mailto:, ...).
    //
    // Examples:
    //   https://example.com/docs/page?x=1 -> "https://example.com"
    //   http://user@localhost:8080/a      -> "http://user@localhost:8080"
    pub fn of(url: &Url) -> Option<Self> {
        if url.cannot_be_a_base() || !url.has_host() {
            return None;
        }

        let prefix = url[..Position::BeforePath].to_string();

        // Links are resolved against the bare origin, not the page path
        let mut base = url.clone();
        base.set_path("/");
        base.set_query(None);
        base.set_fragment(None);

        Some(Self { prefix, base })
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    // Resolves an href against this origin
    //
    // Absolute hrefs come back unchanged (apart from URL normalization).
    // Returns None if the href cannot be joined at all.
    //
    // Examples (origin https://example.com):
    //   "/about"                -> "https://example.com/about"
    //   "docs/intro"            -> "https://example.com/docs/intro"
    //   "//cdn.other.com/x.js"  -> "https://cdn.other.com/x.js"
    //   "mailto:me@example.com" -> "mailto:me@example.com"
    pub fn resolve(&self, href: &str) -> Option<String> {
        self.base.join(href).ok().map(String::from)
    }

    // String-prefix test, the same check a browser-less script would do
    pub fn is_same_origin(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }
}

// True for absolute http(s) URLs whose host has at least one dot and an
// alphabetic final label of 2+ characters
pub fn is_absolute_host_url(url: &str) -> bool {
    ABSOLUTE_HOST_URL.is_match(url)
}

// Picks the bucket for a resolved link, first match wins
//
// Both branches only fire for URLs not already in their set. A URL that
// matches the absolute-host pattern but is already a known subdomain falls
// through to the same-origin test.
pub fn classify(
    url: &str,
    origin: &Origin,
    subdomains: &BTreeSet<String>,
    links: &BTreeSet<String>,
) -> Classification {
    if is_absolute_host_url(url) && !subdomains.contains(url) {
        Classification::Subdomain
    } else if origin.is_same_origin(url) && !links.contains(url) {
        Classification::SameOrigin
    } else {
        Classification::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(url: &str) -> Origin {
        Origin::of(&Url::parse(url).unwrap()).unwrap()
    }

    #[test]
    fn test_origin_strips_path_query_and_fragment() {
        let origin = origin("https://example.com/docs/page?x=1#top");
        assert_eq!(origin.as_str(), "https://example.com");
    }

    #[test]
    fn test_origin_keeps_port_and_userinfo() {
        let origin = origin("http://user@localhost:8080/a");
        assert_eq!(origin.as_str(), "http://user@localhost:8080");
    }

    #[test]
    fn test_origin_of_url_without_host() {
        let url = Url::parse("mailto:me@example.com").unwrap();
        assert!(Origin::of(&url).is_none());
    }

    #[test]
    fn test_resolve_relative_against_origin_not_page() {
        let origin = origin("https://example.com/deep/page.html");
        assert_eq!(
            origin.resolve("other.html"),
            Some("https://example.com/other.html".to_string())
        );
        assert_eq!(
            origin.resolve("/about"),
            Some("https://example.com/about".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_and_protocol_relative() {
        let origin = origin("https://example.com");
        assert_eq!(
            origin.resolve("https://other.org/x"),
            Some("https://other.org/x".to_string())
        );
        assert_eq!(
            origin.resolve("//cdn.other.com/x.js"),
            Some("https://cdn.other.com/x.js".to_string())
        );
    }

    #[test]
    fn test_resolve_keeps_fragment_and_special_schemes() {
        let origin = origin("http://localhost");
        assert_eq!(origin.resolve("#top"), Some("http://localhost/#top".to_string()));
        assert_eq!(
            origin.resolve("mailto:me@example.com"),
            Some("mailto:me@example.com".to_string())
        );
    }

    #[test]
    fn test_resolve_invalid_href() {
        let origin = origin("http://localhost");
        assert_eq!(origin.resolve("http://[::1"), None);
    }

    #[test]
    fn test_absolute_host_pattern() {
        assert!(is_absolute_host_url("https://example.com/page"));
        assert!(is_absolute_host_url("http://sub.domain.co.uk"));
        assert!(is_absolute_host_url("https://a.test/x"));

        assert!(!is_absolute_host_url("http://localhost:8080/page"));
        assert!(!is_absolute_host_url("http://127.0.0.1:3000/x"));
        assert!(!is_absolute_host_url("https://example.c/"));
        assert!(!is_absolute_host_url("ftp://example.com/file"));
        assert!(!is_absolute_host_url("mailto:me@example.com"));
        assert!(!is_absolute_host_url("/relative/path"));
    }

    #[test]
    fn test_classify_absolute_same_origin_is_subdomain() {
        let origin = origin("https://example.com");
        let empty = BTreeSet::new();
        assert_eq!(
            classify("https://example.com/page", &origin, &empty, &empty),
            Classification::Subdomain
        );
    }

    #[test]
    fn test_classify_known_subdomain_falls_through() {
        let origin = origin("https://example.com");
        let subdomains = BTreeSet::from(["https://example.com/page".to_string()]);
        let links = BTreeSet::new();
        assert_eq!(
            classify("https://example.com/page", &origin, &subdomains, &links),
            Classification::SameOrigin
        );

        let links = BTreeSet::from(["https://example.com/page".to_string()]);
        assert_eq!(
            classify("https://example.com/page", &origin, &subdomains, &links),
            Classification::Ignored
        );
    }

    #[test]
    fn test_classify_non_dotted_origin() {
        let origin = origin("http://localhost:8080");
        let empty = BTreeSet::new();
        assert_eq!(
            classify("http://localhost:8080/about", &origin, &empty, &empty),
            Classification::SameOrigin
        );
        assert_eq!(
            classify("http://127.0.0.1:9000/x", &origin, &empty, &empty),
            Classification::Ignored
        );
        assert_eq!(
            classify("mailto:me@example.com", &origin, &empty, &empty),
            Classification::Ignored
        );
    }

    #[test]
    fn test_classify_known_link_is_ignored() {
        let origin = origin("http://localhost");
        let subdomains = BTreeSet::new();
        let links = BTreeSet::from(["http://localhost/a".to_string()]);
        assert_eq!(
            classify("http://localhost/a", &origin, &subdomains, &links),
            Classification::Ignored
        );
    }
}
