//! Configuration module for Scour
//!
//! A run is configured entirely from command-line arguments; this module
//! holds the resulting [`CrawlConfig`] value and its validation rules.
//!
//! # Example
//!
//! ```
//! use scour::config::CrawlConfig;
//! use std::path::PathBuf;
//!
//! let config = CrawlConfig::new(
//!     "https://example.com/",
//!     2,
//!     "search term".to_string(),
//!     PathBuf::from("output.txt"),
//!     300.0,
//! )
//! .unwrap();
//! assert_eq!(config.max_depth, 2);
//! ```

mod types;
mod validation;

// Re-export types
pub use types::CrawlConfig;

// Re-export validation entry point
pub use validation::validate;
