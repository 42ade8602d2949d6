// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is written as Rust structs and
// enums, and clap generates the parsing, --help and --version for us.
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "site-recon",
    version = "0.1.0",
    about = "Recursively crawl a website and list its links, external hosts and scripts",
    long_about = "site-recon follows anchor links from a seed URL down to a maximum depth. \
                  It reports same-origin links it crawled, absolute URLs with a real hostname \
                  it found along the way, and every script referenced by the pages it visited."
)]
pub struct Cli {
    /// Increase log verbosity (-v = info, -vv = debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website starting from a seed URL
    ///
    /// Example: site-recon crawl https://example.com --max-depth 2
    Crawl {
        /// Seed URL to start from (must be http or https)
        url: String,

        /// Maximum crawl depth
        ///
        /// Depth 1 = just the seed page
        /// Depth 2 = seed page + the same-origin pages it links to
        /// etc.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        max_depth: u64,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 5)]
        timeout: u64,

        /// User-Agent header sent with every request
        ///
        /// Defaults to a desktop Chrome string
        #[arg(long)]
        user_agent: Option<String>,

        /// Do not follow HTTP redirects
        #[arg(long)]
        no_redirects: bool,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::try_parse_from(["site-recon", "crawl", "https://example.com"]).unwrap();
        let Commands::Crawl {
            url,
            max_depth,
            timeout,
            user_agent,
            no_redirects,
            json,
        } = cli.command;

        assert_eq!(url, "https://example.com");
        assert_eq!(max_depth, 1);
        assert_eq!(timeout, 5);
        assert_eq!(user_agent, None);
        assert!(!no_redirects);
        assert!(!json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_crawl_flags() {
        let cli = Cli::try_parse_from([
            "site-recon",
            "-vv",
            "crawl",
            "https://example.com",
            "--max-depth",
            "3",
            "--timeout",
            "10",
            "--user-agent",
            "test-agent",
            "--no-redirects",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Crawl {
            max_depth,
            timeout,
            user_agent,
            no_redirects,
            json,
            ..
        } = cli.command;
        assert_eq!(max_depth, 3);
        assert_eq!(timeout, 10);
        assert_eq!(user_agent.as_deref(), Some("test-agent"));
        assert!(no_redirects);
        assert!(json);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = Cli::try_parse_from([
            "site-recon",
            "crawl",
            "https://example.com",
            "--max-depth",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_url_required() {
        assert!(Cli::try_parse_from(["site-recon", "crawl"]).is_err());
    }
}
