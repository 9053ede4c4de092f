//! HTTP fetcher
//!
//! This module is the crawl engine's transport boundary: it builds the
//! shared HTTP client and turns one URL into page markup or a classified
//! [`FetchError`]. All fetch errors are recoverable from the engine's point
//! of view; the offending URL is skipped and the crawl continues.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Per-request timeout; a single fetch is the unit of uninterruptible work,
/// so this also bounds how far a run can overshoot its time budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection-establishment timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reasons a single page fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("request timed out for {url}")]
    Timeout { url: String },

    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    #[error("skipping non-HTML page {url} ({content_type})")]
    NotHtml { url: String, content_type: String },
}

/// Builds the HTTP client shared by the whole run
///
/// The client identifies itself with the crate name and version, applies
/// request and connect timeouts, and accepts compressed responses.
/// Redirects follow reqwest's default limited policy.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one URL and returns its markup
///
/// # Arguments
///
/// * `client` - the shared HTTP client
/// * `url` - the URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - the decoded response body
/// * `Err(FetchError)` - non-success status, timeout, transport failure, or
///   a response that declares a non-HTML content type
pub async fn fetch_url(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_transport_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    // A missing Content-Type is given the benefit of the doubt; an explicit
    // non-HTML one is not worth searching for article text.
    if !content_type.is_empty() && !content_type.contains("html") {
        return Err(FetchError::NotHtml {
            url: url.to_string(),
            content_type,
        });
    }

    response
        .text()
        .await
        .map_err(|e| classify_transport_error(url, e))
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}
