// src/report.rs
// =============================================================================
// This file turns a finished crawl into something a human (or a script)
// can read.
//
// Two output modes:
// - Text: a banner before the crawl, then one section per result set
// - JSON: the whole CrawlReport, pretty-printed, nothing else on stdout
//
// Rendering is done into Strings so the tests can look at the output
// without capturing stdout.
// =============================================================================

use crate::crawl::CrawlReport;
use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use std::collections::BTreeSet;
use std::fmt::{self, Write};

// Width of the horizontal rules and label column
const RULE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 20;

// Builds the banner shown before a text-mode crawl
//
// Example:
//   ---------------------------------------------------------------------
//   Recursive Web Crawler starting at 14/10/2026 09:30:00
//   ---------------------------------------------------------------------
//   [*] URL              : https://example.com
//   [*] Max Depth        : 2
//   ---------------------------------------------------------------------
pub fn render_banner(url: &str, max_depth: usize) -> Result<String> {
    let rule = "-".repeat(RULE_WIDTH);
    let started = Local::now().format("%d/%m/%Y %H:%M:%S");
    let title = format!("Recursive Web Crawler starting at {}", started);

    let mut out = String::new();
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title.cyan().bold())?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:<width$} : {}", "[*] URL", url, width = LABEL_WIDTH)?;
    writeln!(out, "{:<width$} : {}", "[*] Max Depth", max_depth, width = LABEL_WIDTH)?;
    writeln!(out, "{}", rule)?;
    Ok(out)
}

// Builds the text listing of a finished crawl
//
// Empty sets are left out entirely. Sections always appear in the order
// subdomains, links, scripts.
pub fn render_text(report: &CrawlReport) -> Result<String> {
    let mut out = String::new();

    write_section(&mut out, "Subdomains", report.subdomains())?;
    write_section(&mut out, "Links", report.links())?;
    write_section(&mut out, "JS Files", report.scripts())?;

    writeln!(out, "📊 Summary:")?;
    writeln!(out, "   🌐 Seed: {} (max depth {})", report.seed(), report.max_depth())?;
    writeln!(out, "   📄 Pages visited: {}", report.pages_visited())?;
    writeln!(out, "   ❌ Failed: {}", report.pages_failed())?;

    Ok(out)
}

// Appends one "[+] Title (n):" section, or nothing for an empty set
fn write_section(out: &mut String, title: &str, urls: &BTreeSet<String>) -> fmt::Result {
    if urls.is_empty() {
        return Ok(());
    }

    let heading = format!("[+] {} ({}):", title, urls.len());
    writeln!(out, "{}", heading.green())?;
    for url in urls {
        writeln!(out, "  - {}", url)?;
    }
    writeln!(out)
}

// Serializes the report as pretty JSON
pub fn render_json(report: &CrawlReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

// Prints the results either as text or JSON
pub fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(report)?);
    } else {
        print!("{}", render_text(report)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::Crawler;
    use crate::fetch::{FetchError, Fetcher};
    use async_trait::async_trait;

    // Always serves the same page
    struct OnePage(&'static str);

    #[async_trait]
    impl Fetcher for OnePage {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    async fn sample_report() -> CrawlReport {
        let page = r#"
            <a href="https://b.test/y">y</a>
            <a href="/x">x</a>
            <script src="/s.js"></script>
        "#;
        Crawler::new(OnePage(page))
            .with_max_depth(1)
            .run("https://a.test")
            .await
            .unwrap()
    }

    #[test]
    fn test_banner_lists_url_and_depth() {
        colored::control::set_override(false);
        let banner = render_banner("https://example.com", 2).unwrap();
        assert!(banner.contains("Recursive Web Crawler starting at "));
        assert!(banner.contains("[*] URL              : https://example.com"));
        assert!(banner.contains("[*] Max Depth        : 2"));
        assert!(banner.starts_with(&"-".repeat(RULE_WIDTH)));
    }

    #[tokio::test]
    async fn test_text_sections() {
        colored::control::set_override(false);
        let text = render_text(&sample_report().await).unwrap();

        assert!(text.contains("[+] Subdomains (2):\n  - https://a.test/x\n  - https://b.test/y\n"));
        assert!(text.contains("[+] JS Files (1):\n  - https://a.test/s.js\n"));
        // No links were followed, so that section is absent
        assert!(!text.contains("[+] Links"));
        assert!(text.contains("Seed: https://a.test/ (max depth 1)"));
        assert!(text.contains("Pages visited: 1"));
    }

    #[tokio::test]
    async fn test_json_output() {
        let json = render_json(&sample_report().await).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], "https://a.test/");
        assert_eq!(value["max_depth"], 1);
        assert_eq!(value["pages_visited"], 1);
        assert_eq!(value["pages_failed"], 0);
        assert_eq!(
            value["subdomains"],
            serde_json::json!(["https://a.test/x", "https://b.test/y"])
        );
        assert_eq!(value["links"], serde_json::json!([]));
        assert_eq!(value["scripts"], serde_json::json!(["https://a.test/s.js"]));
    }
}
