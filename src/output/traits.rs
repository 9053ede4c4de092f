//! Article sink trait and record types

use thiserror::Error;

/// Errors that can occur during output operations
///
/// Unlike fetch errors these are fatal: the run cannot continue without a
/// usable output sink.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to open output file '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A single matched page, ready to be persisted
///
/// Created by the crawl engine when a page's text contains the search
/// string, handed to the sink, and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// The page headline (document title, first heading, or the URL)
    pub headline: String,

    /// The URL the page was fetched from
    pub url: String,

    /// The page's extracted visible text
    pub body_text: String,
}

/// Destination for matched articles
///
/// The crawl engine appends records one at a time in the order matches are
/// found. Implementations decide where they go; the production sink is
/// [`crate::output::ArticleWriter`].
pub trait ArticleSink {
    /// Appends one matched article
    ///
    /// An error here aborts the whole run, so implementations should only
    /// fail when the sink is genuinely unusable.
    fn append(&mut self, record: &ArticleRecord) -> OutputResult<()>;
}

impl<T: ArticleSink + ?Sized> ArticleSink for &mut T {
    fn append(&mut self, record: &ArticleRecord) -> OutputResult<()> {
        (**self).append(record)
    }
}

/// Sink that collects records in memory, for tests
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<ArticleRecord>,
}

impl ArticleSink for MemorySink {
    fn append(&mut self, record: &ArticleRecord) -> OutputResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
