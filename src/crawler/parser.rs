//! HTML extraction: page text, headline, and outbound links
//!
//! The engine hands every fetched page to [`parse_html`] and gets back the
//! three things it cares about: the visible text (searched for the target
//! string and persisted as the article body), a headline candidate, and the
//! outbound links in document order, already resolved to absolute URLs.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Headline candidate: the document title, or the first heading
    pub headline: Option<String>,

    /// Visible text of the page, whitespace-normalized
    pub text: String,

    /// Outbound links in document order (absolute URLs)
    pub links: Vec<String>,
}

/// Parses HTML content and extracts text, headline, and links
///
/// Parsing is lenient and never fails; malformed markup simply yields
/// whatever text and links survive.
///
/// # Arguments
///
/// * `html` - the HTML content to parse
/// * `base_url` - the page's own URL, for resolving relative links
///
/// # Example
///
/// ```
/// use scour::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>News</title></head><body><a href="/a">a</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let page = parse_html(html, &base_url);
/// assert_eq!(page.headline, Some("News".to_string()));
/// assert_eq!(page.links, vec!["https://example.com/a".to_string()]);
/// ```
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        headline: extract_headline(&document),
        text: extract_text(&document),
        links: extract_links(&document, base_url),
    }
}

/// Extracts the headline: `<title>` first, then the first `h1`/`h2`
fn extract_headline(document: &Html) -> Option<String> {
    for css in ["title", "h1, h2"] {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        let found = document
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Extracts the page's visible text, joined by single spaces
fn extract_text(document: &Html) -> String {
    let mut chunks: Vec<String> = Vec::new();
    collect_text(document.root_element(), &mut chunks);
    chunks.join(" ")
}

/// Walks the element tree collecting text nodes, skipping non-visible ones
fn collect_text(element: ElementRef<'_>, chunks: &mut Vec<String>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                // Collapse internal runs of whitespace as well.
                chunks.push(trimmed.split_whitespace().collect::<Vec<_>>().join(" "));
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if matches!(
                child_element.value().name(),
                "script" | "style" | "noscript"
            ) {
                continue;
            }
            collect_text(child_element, chunks);
        }
    }
}

/// Extracts all followable links from the document, in document order
fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            // Download links point at files, not pages.
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves an href to an absolute URL, dropping unfollowable ones
///
/// Returns None for `javascript:`, `mailto:`, `tel:` and `data:` schemes,
/// fragment-only anchors, unparseable hrefs, and anything that resolves to
/// a non-HTTP(S) URL.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => match absolute_url.scheme() {
            "http" | "https" => Some(absolute_url.to_string()),
            _ => None,
        },
        Err(_) => None,
    }
}
