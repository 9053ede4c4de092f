//! End-to-end tests for the crawler
//!
//! These tests use wiremock to stand up mock HTTP servers and run the full
//! crawl cycle against a temporary output file.

use scour::config::CrawlConfig;
use scour::crawler::{crawl, Termination};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a run configuration pointed at a scratch output file
fn test_config(seed: &str, depth: u32, search: &str, output: &Path, run_time: f64) -> CrawlConfig {
    CrawlConfig::new(
        seed,
        depth,
        search.to_string(),
        PathBuf::from(output),
        run_time,
    )
    .expect("test config should validate")
}

/// HTML response with the content type the fetcher expects
fn html_page(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(body.into_bytes(), "text/html")
}

fn output_file(dir: &TempDir) -> PathBuf {
    dir.path().join("articles.txt")
}

#[tokio::test]
async fn test_single_match_across_three_pages() {
    // The seed links to b and c; only b mentions the term.
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(format!(
            r#"<html><head><title>Front</title></head><body>
            <a href="{base}/b">b</a>
            <a href="{base}/c">c</a>
            </body></html>"#
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html_page(
            r#"<html><head><title>Big Sale at B</title></head>
            <body>everything here is on sale</body></html>"#
                .to_string(),
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(html_page(
            r#"<html><head><title>Quiet C</title></head><body>nothing here</body></html>"#
                .to_string(),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 1, "sale", &out, 60.0);

    let summary = crawl(config).await.expect("crawl failed");

    assert_eq!(summary.termination, Termination::Exhausted);
    assert_eq!(summary.pages_fetched, 3);
    assert_eq!(summary.articles_written, 1);
    assert_eq!(summary.pages_skipped(), 0);

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Search Term: sale\n"));
    assert_eq!(contents.matches("Big Sale at B").count(), 1);
    assert!(!contents.contains("Quiet C"));
    assert!(contents.contains(&format!("{base}/b")));
}

#[tokio::test]
async fn test_depth_ceiling_is_exact() {
    // Chain: / -> /level1 -> /level2 with max_depth=1; level2 must never be
    // fetched, but level1 (at exactly max_depth) must be.
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(format!(
            r#"<html><body><a href="{base}/level1">next</a></body></html>"#
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(html_page(format!(
            r#"<html><body>sale <a href="{base}/level2">deeper</a></body></html>"#
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(html_page("<html><body>sale</body></html>".to_string()))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 1, "sale", &out, 60.0);

    let summary = crawl(config).await.expect("crawl failed");

    assert_eq!(summary.pages_fetched, 2);
    // level1 is still searched even though its links are not followed.
    assert_eq!(summary.articles_written, 1);
}

#[tokio::test]
async fn test_no_match_leaves_header_only() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            "<html><head><title>Calm</title></head><body>no deals today</body></html>".to_string(),
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 0, "sale", &out, 60.0);

    let summary = crawl(config).await.expect("crawl failed");

    assert_eq!(summary.articles_written, 0);
    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        contents,
        format!("Search Term: sale\nURL: {base}/\nSearch Depth: 0\n\n")
    );
}

#[tokio::test]
async fn test_fetch_failure_skips_only_that_url() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(format!(
            r#"<html><body>
            <a href="{base}/broken">broken</a>
            <a href="{base}/b">b</a>
            </body></html>"#
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html_page(
            r#"<html><head><title>Sale at B</title></head><body>sale</body></html>"#.to_string(),
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 1, "sale", &out, 60.0);

    let summary = crawl(config).await.expect("crawl failed");

    assert_eq!(summary.termination, Termination::Exhausted);
    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.articles_written, 1);
    assert_eq!(summary.skipped, vec![format!("{base}/broken")]);

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Sale at B"));
}

#[tokio::test]
async fn test_zero_budget_times_out_before_first_fetch() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("<html><body>sale</body></html>".to_string()))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 1, "sale", &out, 0.0);

    let summary = crawl(config).await.expect("crawl failed");

    assert_eq!(summary.termination, Termination::TimedOut);
    assert_eq!(summary.pages_fetched, 0);

    // The header block is written at open, before the budget check.
    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Search Term: sale\n"));
}

#[tokio::test]
async fn test_duplicate_links_fetched_once() {
    // The seed links to /a twice and /a links back to the seed; every page
    // must still be fetched exactly once.
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(format!(
            r#"<html><body>
            <a href="{base}/a">first</a>
            <a href="{base}/a">again</a>
            </body></html>"#
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html_page(format!(
            r#"<html><body><a href="{base}/">home</a></body></html>"#
        )))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 3, "sale", &out, 60.0);

    let summary = crawl(config).await.expect("crawl failed");
    assert_eq!(summary.pages_fetched, 2);
}

#[tokio::test]
async fn test_rerun_reproduces_identical_output() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(format!(
            r#"<html><head><title>Home</title></head><body>
            sale <a href="{base}/b">b</a>
            </body></html>"#
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html_page(
            r#"<html><head><title>B</title></head><body>sale again</body></html>"#.to_string(),
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first_out = dir.path().join("first.txt");
    let second_out = dir.path().join("second.txt");

    crawl(test_config(&format!("{base}/"), 1, "sale", &first_out, 60.0))
        .await
        .expect("first crawl failed");
    crawl(test_config(&format!("{base}/"), 1, "sale", &second_out, 60.0))
        .await
        .expect("second crawl failed");

    let first = std::fs::read_to_string(&first_out).unwrap();
    let second = std::fs::read_to_string(&second_out).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unwritable_output_path_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory is not a writable file target.
    let config = test_config("https://example.com/", 1, "sale", dir.path(), 60.0);

    let result = crawl(config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_match_is_case_insensitive() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<html><head><title>Shouting</title></head><body>HUGE SALE</body></html>"#
                .to_string(),
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 0, "sale", &out, 60.0);

    let summary = crawl(config).await.expect("crawl failed");
    assert_eq!(summary.articles_written, 1);
}

#[tokio::test]
async fn test_body_text_is_wrapped() {
    let server = MockServer::start().await;
    let base = server.uri();

    let long_sentence = "sale ".repeat(60);
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(format!(
            r#"<html><head><title>Wall of text</title></head><body>{long_sentence}</body></html>"#
        )))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = output_file(&dir);
    let config = test_config(&format!("{base}/"), 0, "sale", &out, 60.0);

    crawl(config).await.expect("crawl failed");

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents
        .lines()
        .all(|line| line.chars().count() <= 80));
}
