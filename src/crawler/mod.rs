//! Crawler module: fetching, extraction, and the crawl loop
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with error classification
//! - HTML parsing: text, headline, and link extraction
//! - The FIFO frontier and depth bookkeeping
//! - The engine driving the whole run

mod engine;
mod fetcher;
mod frontier;
mod parser;

pub use engine::{CrawlSummary, Engine, Termination};
pub use fetcher::{build_http_client, fetch_url, FetchError};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{parse_html, ParsedPage};

use crate::config::CrawlConfig;
use crate::output::ArticleWriter;
use crate::Result;

/// Runs a complete crawl with the file-backed article writer
///
/// Opens the output file (writing its header block), then drives the engine
/// until the frontier is exhausted or the time budget expires. The output
/// file is closed on every exit path.
///
/// # Arguments
///
/// * `config` - the run configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - the run completed or timed out
/// * `Err(ScourError)` - the output file could not be created or written
pub async fn crawl(config: CrawlConfig) -> Result<CrawlSummary> {
    let writer = ArticleWriter::create(&config)?;
    let engine = Engine::new(config, writer)?;
    engine.run().await
}
