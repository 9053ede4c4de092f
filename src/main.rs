//! Scour main entry point
//!
//! Command-line interface for the Scour article scraper.

use anyhow::Context;
use clap::Parser;
use scour::config::CrawlConfig;
use scour::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scour: a bounded-depth article scraper
///
/// Scour crawls pages reachable from a seed URL breadth-first, searches each
/// page's text for a target string, and writes matching articles to the
/// output file while printing their headlines. The run stops when every
/// reachable page within the depth limit has been visited or when the time
/// budget expires, whichever comes first.
#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(version)]
#[command(about = "A bounded-depth article scraper", long_about = None)]
struct Cli {
    /// Seed URL where the crawl starts
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of link hops to follow from the seed
    #[arg(value_name = "DEPTH")]
    depth: u32,

    /// Substring to search for in each page's text (case-insensitive)
    #[arg(value_name = "SEARCH_STRING")]
    search_string: String,

    /// File where matched articles are written
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: PathBuf,

    /// Maximum wall-clock run time in seconds
    #[arg(value_name = "RUN_TIME")]
    run_time: f64,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = CrawlConfig::new(
        &cli.url,
        cli.depth,
        cli.search_string,
        cli.output_file,
        cli.run_time,
    )
    .context("invalid arguments")?;

    let summary = crawl(config).await?;

    // Timeout is an expected terminal condition, not an error.
    if summary.timed_out() {
        println!("scrape has timed out");
    }

    tracing::info!(
        "{} pages fetched, {} articles written, {} skipped",
        summary.pages_fetched,
        summary.articles_written,
        summary.pages_skipped()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("scour=info,warn"),
            1 => EnvFilter::new("scour=debug,info"),
            2 => EnvFilter::new("scour=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
