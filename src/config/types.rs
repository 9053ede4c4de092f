use crate::config::validation::validate;
use crate::{ConfigError, ConfigResult};
use std::path::PathBuf;
use url::Url;

/// Immutable configuration for a single crawl run
///
/// Built once from the command-line arguments before the crawl starts and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// URL the crawl starts from (depth 0)
    pub seed_url: Url,

    /// Maximum number of link hops to follow from the seed
    ///
    /// Pages at exactly this depth are still fetched and searched, but their
    /// outbound links are not followed.
    pub max_depth: u32,

    /// Substring to look for in each page's extracted text
    pub search_string: String,

    /// File that receives the header block and matched articles
    pub output_path: PathBuf,

    /// Wall-clock budget for the whole run, in seconds
    ///
    /// Zero is allowed and times the run out before the first fetch.
    pub max_run_seconds: f64,
}

impl CrawlConfig {
    /// Builds and validates a run configuration
    ///
    /// # Arguments
    ///
    /// * `seed_url` - the starting URL as given on the command line
    /// * `max_depth` - maximum link depth from the seed
    /// * `search_string` - substring searched for in page text
    /// * `output_path` - destination file for matched articles
    /// * `max_run_seconds` - wall-clock budget in seconds
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlConfig)` - arguments parse and pass validation
    /// * `Err(ConfigError)` - the seed URL is unparseable or a field is out
    ///   of range
    pub fn new(
        seed_url: &str,
        max_depth: u32,
        search_string: String,
        output_path: PathBuf,
        max_run_seconds: f64,
    ) -> ConfigResult<Self> {
        let seed_url = Url::parse(seed_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", seed_url, e)))?;

        let config = Self {
            seed_url,
            max_depth,
            search_string,
            output_path,
            max_run_seconds,
        };

        validate(&config)?;
        Ok(config)
    }
}
