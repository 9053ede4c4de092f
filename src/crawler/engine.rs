//! Crawl engine: traversal, bookkeeping, and the per-page pipeline
//!
//! The engine owns the crawl's moving parts: the breadth-first frontier,
//! the visited set that guarantees each URL is fetched at most once, the
//! wall-clock budget check reachable on every iteration, and the per-page
//! fetch, extract, match, and record pipeline. Fetching and parsing are
//! delegated to the fetcher and parser modules; matched articles go to an
//! [`ArticleSink`].

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::parse_html;
use crate::output::{ArticleRecord, ArticleSink};
use crate::Result;
use reqwest::Client;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use url::Url;

/// Why a crawl run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The frontier ran dry; every reachable page within depth was visited
    Exhausted,

    /// The wall-clock budget expired before the frontier did
    TimedOut,
}

/// What a crawl run accomplished
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// Why the run ended
    pub termination: Termination,

    /// Pages fetched successfully
    pub pages_fetched: usize,

    /// Articles written to the output sink
    pub articles_written: usize,

    /// URLs skipped because their fetch failed
    pub skipped: Vec<String>,
}

impl CrawlSummary {
    fn new() -> Self {
        Self {
            termination: Termination::Exhausted,
            pages_fetched: 0,
            articles_written: 0,
            skipped: Vec::new(),
        }
    }

    /// Returns the number of URLs skipped due to per-page failures
    pub fn pages_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// Returns whether the run ended because the budget expired
    pub fn timed_out(&self) -> bool {
        self.termination == Termination::TimedOut
    }
}

/// Per-run traversal state, created inside `run` and destroyed with it
struct CrawlState {
    frontier: Frontier,
    visited: HashSet<String>,
    started: Instant,
}

impl CrawlState {
    fn new(seed_url: &str) -> Self {
        Self {
            frontier: Frontier::seeded(seed_url),
            visited: HashSet::new(),
            started: Instant::now(),
        }
    }
}

/// The crawl engine
///
/// Holds the immutable run configuration, the shared HTTP client, and the
/// article sink. Traversal state lives only for the duration of [`run`].
///
/// [`run`]: Engine::run
pub struct Engine<S: ArticleSink> {
    config: CrawlConfig,
    client: Client,
    sink: S,
}

impl<S: ArticleSink> Engine<S> {
    /// Creates an engine for one run
    pub fn new(config: CrawlConfig, sink: S) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self {
            config,
            client,
            sink,
        })
    }

    /// Runs the crawl to completion
    ///
    /// Processes the frontier first-in-first-out starting from the seed at
    /// depth 0. Before every dequeue the elapsed wall-clock time is checked
    /// against the budget; once it is exceeded no further fetches happen and
    /// whatever was already written stays written.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSummary)` - the run ended by exhaustion or timeout
    /// * `Err(ScourError)` - the output sink failed; per-URL fetch errors
    ///   never surface here
    pub async fn run(mut self) -> Result<CrawlSummary> {
        let budget = Duration::from_secs_f64(self.config.max_run_seconds);
        let needle = self.config.search_string.to_lowercase();
        let mut state = CrawlState::new(self.config.seed_url.as_str());
        let mut summary = CrawlSummary::new();

        tracing::info!(
            "starting crawl from {} (depth {}, budget {}s)",
            self.config.seed_url,
            self.config.max_depth,
            self.config.max_run_seconds
        );

        loop {
            if state.started.elapsed() >= budget {
                tracing::warn!(
                    "time budget of {}s exhausted, stopping crawl",
                    self.config.max_run_seconds
                );
                summary.termination = Termination::TimedOut;
                break;
            }

            let Some(entry) = state.frontier.pop() else {
                tracing::info!("frontier is empty, crawl complete");
                summary.termination = Termination::Exhausted;
                break;
            };

            // Mark visited at dequeue, before the fetch, so a URL sitting in
            // the frontier more than once is still fetched at most once.
            if !state.visited.insert(entry.url.clone()) {
                continue;
            }

            tracing::debug!("fetching {} at depth {}", entry.url, entry.depth);
            self.process_page(entry, &needle, &mut state, &mut summary)
                .await?;
        }

        tracing::info!(
            "crawl finished: {} pages fetched, {} articles written, {} skipped in {:.2?}",
            summary.pages_fetched,
            summary.articles_written,
            summary.pages_skipped(),
            state.started.elapsed()
        );

        Ok(summary)
    }

    /// Runs the per-page pipeline for one dequeued entry
    ///
    /// Fetch and parse problems skip this URL and record it in the summary;
    /// only sink failures propagate.
    async fn process_page(
        &mut self,
        entry: FrontierEntry,
        needle: &str,
        state: &mut CrawlState,
        summary: &mut CrawlSummary,
    ) -> Result<()> {
        let markup = match fetch_url(&self.client, &entry.url).await {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!("skipping {}: {}", entry.url, e);
                summary.skipped.push(entry.url);
                return Ok(());
            }
        };
        summary.pages_fetched += 1;

        let base_url = match Url::parse(&entry.url) {
            Ok(base_url) => base_url,
            Err(e) => {
                tracing::warn!("skipping {}: cannot re-parse as base URL: {}", entry.url, e);
                summary.skipped.push(entry.url);
                return Ok(());
            }
        };

        let page = parse_html(&markup, &base_url);

        if is_match(&page.text, needle) {
            let record = ArticleRecord {
                headline: page
                    .headline
                    .clone()
                    .unwrap_or_else(|| entry.url.clone()),
                url: entry.url.clone(),
                body_text: page.text,
            };
            self.sink.append(&record)?;
            summary.articles_written += 1;
        }

        // Pages at max_depth are searched but contribute no further links.
        if entry.depth < self.config.max_depth {
            for url in page.links {
                state.frontier.push(FrontierEntry {
                    url,
                    depth: entry.depth + 1,
                });
            }
        }

        Ok(())
    }
}

/// Case-insensitive substring match
///
/// The needle is expected pre-lowercased; the page text is lowercased here.
fn is_match(text: &str, needle_lower: &str) -> bool {
    text.to_lowercase().contains(needle_lower)
}
