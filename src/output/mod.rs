//! Output handling for matched articles
//!
//! This module owns the article output file: the header block written when
//! the file is opened, the per-article blocks appended as matches are found,
//! and the console line printed for each headline.
//!
//! The [`ArticleSink`] trait is the seam between the crawl engine and the
//! file format, so tests can collect records in memory instead.

mod traits;
mod writer;

// Re-export main types
pub use traits::{ArticleRecord, ArticleSink, MemorySink, OutputError, OutputResult};
pub use writer::ArticleWriter;
