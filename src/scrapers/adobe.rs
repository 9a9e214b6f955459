//! Adobe product security page scraper.
//!
//! Fetches a product page such as
//! <https://helpx.adobe.com/security/products/magento.html> and extracts the
//! links to individual bulletins.
//!
//! # Link Pattern
//!
//! Bulletin links are anchors whose `href` contains the product path
//! (`/security/products/magento/`) and whose visible text contains the
//! bulletin marker (`APSB`). Relative hrefs are resolved against the page URL.

use crate::error::{DigestError, Result};
use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Page scraped when no URL is configured.
pub const DEFAULT_PAGE_URL: &str = "https://helpx.adobe.com/security/products/magento.html";

/// Href substring identifying bulletin links on the default page.
pub const DEFAULT_PATH_SEGMENT: &str = "/security/products/magento/";

/// Anchor text marker identifying bulletin links.
pub const DEFAULT_MARKER: &str = "APSB";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const BOT_USER_AGENT: &str = "Mozilla/5.0 (compatible; adobe-digest-bot/0.1)";
const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const LANGUAGE: &str = "en-US,en;q=0.9";

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Which anchors count as bulletin links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFilter {
    /// Substring the `href` must contain.
    pub path_segment: String,
    /// Substring the anchor's visible text must contain.
    pub marker: String,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            path_segment: DEFAULT_PATH_SEGMENT.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl LinkFilter {
    fn matches(&self, href: &str, text: &str) -> bool {
        href.contains(&self.path_segment) && text.contains(&self.marker)
    }
}

/// Everything needed for one scrape.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub page_url: String,
    pub filter: LinkFilter,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            filter: LinkFilter::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Build an HTTP client that presents itself like a browser.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, header_value("User-Agent", BOT_USER_AGENT)?);
    headers.insert(ACCEPT, header_value("Accept", HTML_ACCEPT)?);
    headers.insert(ACCEPT_LANGUAGE, header_value("Accept-Language", LANGUAGE)?);
    headers.insert(UPGRADE_INSECURE_REQUESTS, header_value("Upgrade-Insecure-Requests", "1")?);

    let client = Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| DigestError::InvalidHeader { name })
}

/// GET `url` once and return the body. Any non-2xx status is an error.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    info!(bytes = body.len(), "Fetched page");
    Ok(body)
}

/// Collect bulletin links from `html`, resolved against `base_url`.
///
/// Anchors are visited in document order and duplicates are kept.
pub fn extract_bulletin_links(html: &str, base_url: &Url, filter: &LinkFilter) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let text: String = element.text().map(str::trim).collect();
        if !filter.matches(href, &text) {
            continue;
        }

        match base_url.join(href) {
            Ok(resolved) => links.push(resolved.to_string()),
            Err(e) => warn!(%href, error = %e, "Could not resolve bulletin link"),
        }
    }

    debug!(urls = ?links, "Bulletin links");
    links
}

/// Fetch a product security page and return its bulletin links.
///
/// Builds a client with the browser-like header set, issues a single GET
/// and keeps the anchors selected by `config.filter`. There is no retry.
///
/// # Arguments
///
/// * `config` - Page URL, link filter and request timeout
///
/// # Returns
///
/// Absolute bulletin URLs in document order, or an error if the page URL
/// is invalid, the request fails, or the server answers with a non-2xx
/// status.
#[instrument(level = "info", skip_all, fields(url = %config.page_url))]
pub async fn index_bulletin_links(config: &FetchConfig) -> Result<Vec<String>> {
    let base_url = Url::parse(&config.page_url)?;
    let client = build_client(config.timeout)?;

    let html = fetch_page(&client, base_url.as_str()).await?;
    let links = extract_bulletin_links(&html, &base_url, &config.filter);

    info!(count = links.len(), "Indexed bulletin links");
    Ok(links)
}
