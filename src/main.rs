// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Build the fetcher and crawler from the arguments, run the crawl
// 4. Print the results and exit (0 = crawl completed, 2 = error)
//
// Rust concepts used:
// - async/await: The fetcher talks to the network asynchronously
// - Result<T, E>: For error handling
// - Closures: The progress callback that prints each page as it's crawled
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod crawl;    // src/crawl/ - the traversal engine and link classification
mod extract;  // src/extract/ - pulling anchors and scripts out of HTML
mod fetch;    // src/fetch/ - HTTP fetching
mod report;   // src/report.rs - banner, text and JSON output

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method
use crawl::{Crawler, ProgressCallback};
use fetch::{FetchConfig, HttpFetcher};

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// The crawl visits one page at a time, so a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole error chain, e.g. "Invalid URL ...: relative URL without a base"
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl completed (failed pages are not an error)
//   Err   = invalid input or setup failure (main turns this into exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Logging has to be ready before anything else can log
    init_logging(cli.verbose);

    match cli.command {
        Commands::Crawl {
            url,
            max_depth,
            timeout,
            user_agent,
            no_redirects,
            json,
        } => {
            // Turn the flags into fetcher settings, falling back to the defaults
            let config = FetchConfig {
                user_agent: user_agent.unwrap_or_else(|| fetch::DEFAULT_USER_AGENT.to_string()),
                timeout: Duration::from_secs(timeout),
                follow_redirects: !no_redirects,
            };

            // clap parses the depth as u64; the crawler counts in usize
            let max_depth = usize::try_from(max_depth).context("Max depth is too large")?;

            handle_crawl(&url, max_depth, &config, json).await
        }
    }
}

// Sets up the tracing subscriber
//
// Logs go to stderr so --json output on stdout stays parseable.
// RUST_LOG wins over -v if it is set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Handles the 'crawl' subcommand
// Parameters:
//   url: seed URL to start from (e.g., "https://example.com")
//   max_depth: how many levels deep to crawl (1 = just the seed page)
//   config: User-Agent, timeout and redirect settings for every request
//   json: whether to output JSON format
async fn handle_crawl(url: &str, max_depth: usize, config: &FetchConfig, json: bool) -> Result<i32> {
    // One HTTP client for the whole crawl (connection pooling)
    let fetcher = HttpFetcher::new(config)?;
    let mut crawler = Crawler::new(fetcher).with_max_depth(max_depth);

    // In text mode we show a banner and a line per page as we go.
    // In JSON mode stdout must contain nothing but the JSON document.
    if !json {
        print!("{}", report::render_banner(url, max_depth)?);

        let progress: ProgressCallback = Arc::new(|depth: usize, page: &str| {
            println!("  Crawling [depth {}]: {}", depth, page);
        });
        crawler = crawler.with_progress_callback(progress);
    }

    // Run the crawl. This only fails for a bad seed URL; pages that
    // can't be fetched are logged and counted in the report instead.
    let result = crawler.run(url).await?;

    if !json {
        println!();
    }
    report::print_report(&result, json)?;

    // Completion is reported separately from errors, which go to stderr
    if !json {
        println!("✅ Crawl complete");
    }

    Ok(0)
}
