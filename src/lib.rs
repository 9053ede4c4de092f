//! Scour: a bounded-depth article scraper
//!
//! This crate implements a small web crawler that walks pages reachable from
//! a seed URL breadth-first, searches each page's text for a target string,
//! and writes matching articles to a plain-text output file while printing
//! their headlines to the console. A run is bounded both by a maximum link
//! depth and by a wall-clock time budget.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Scour operations
///
/// Only setup and output-write failures surface through this type; per-URL
/// fetch and parse problems are contained inside the crawl loop and reported
/// through the run summary instead.
#[derive(Debug, Error)]
pub enum ScourError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed URL: {0}")]
    InvalidUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Scour operations
pub type Result<T> = std::result::Result<T, ScourError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, CrawlSummary, Termination};
pub use output::{ArticleRecord, ArticleSink, ArticleWriter};
