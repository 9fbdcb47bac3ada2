//! HTTP fetcher implementation
//!
//! The sole network boundary of the crawler. Builds a reqwest client carrying
//! a fixed browser-like header set and exposes a single GET operation that
//! returns the raw document body. Failures are surfaced to the caller without
//! retry; the crawl engine isolates them to the branch that raised them.

use crate::config::FetchConfig;
use crate::FetchError;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, UPGRADE_INSECURE_REQUESTS,
};
use reqwest::Client;
use std::time::Duration;

/// Result of a successful fetch
#[derive(Debug)]
pub struct FetchedPage {
    /// Raw response body
    pub body: String,

    /// HTTP status code
    pub status: u16,
}

/// Builds the HTTP client shared by every fetch of a crawl run
///
/// The header set simulates an ordinary browser session. The client is reused
/// read-only across all concurrent fetches, so no exclusion is needed around it.
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_str(&config.accept)
            .unwrap_or_else(|_| HeaderValue::from_static("text/html")),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(&config.accept_language)
            .unwrap_or_else(|_| HeaderValue::from_static("en-US,en;q=0.9")),
    );
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the body with its status code
///
/// Non-success status codes are errors: the crawl treats any page it cannot
/// read as a failed branch rather than inspecting error bodies.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Http {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e,
    })?;

    Ok(FetchedPage {
        body,
        status: status.as_u16(),
    })
}
