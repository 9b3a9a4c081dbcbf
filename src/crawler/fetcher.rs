//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the discovery engine:
//! - Building the per-run HTTP client (user agent, timeouts, redirects)
//! - GET requests returning body, final URL and status
//! - HEAD probes confirming a media URL is reachable
//! - Classifying failures as skips instead of errors
//!
//! Nothing here retries. A failed fetch yields a [`SkipReason`] and the caller
//! treats the page as empty.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::state::SkipReason;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Redirect hops followed before a fetch is abandoned
const MAX_REDIRECTS: usize = 10;

/// A fetched page, consumed immediately by extraction
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Page body text
    pub body: String,
    /// URL after redirects; relative links resolve against this
    pub final_url: Url,
    /// HTTP status code
    pub status: u16,
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered 200
    Success {
        /// Final URL after redirects
        final_url: Url,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Any status other than 200
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Converts the fetch into a page, or the reason there is none
    pub fn into_page(self) -> Result<PageResult, SkipReason> {
        match self {
            Self::Success {
                final_url,
                status_code,
                body,
            } => Ok(PageResult {
                body,
                final_url,
                status: status_code,
            }),
            Self::HttpError { status_code } => Err(SkipReason::HttpStatus(status_code)),
            Self::NetworkError { error } => Err(SkipReason::Network(error)),
        }
    }
}

/// Builds the HTTP client shared by every task of a run
///
/// # Arguments
///
/// * `crawler` - Timeout settings
/// * `user_agent` - The user agent header value
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use gallery_trawl::config::Config;
/// use gallery_trawl::crawler::build_http_client;
///
/// let config = Config::default();
/// let client = build_http_client(&config.crawler, &config.user_agent).unwrap();
/// ```
pub fn build_http_client(
    crawler: &CrawlerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.value.clone())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with GET, following redirects
///
/// # Response Handling
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | `Success` with body and post-redirect URL |
/// | Any other status | `HttpError` |
/// | Timeout / connect failure | `NetworkError` |
/// | Body cannot be read | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().clone();

            if status != StatusCode::OK {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else if e.is_redirect() {
                "Too many redirects".to_string()
            } else {
                e.to_string()
            };
            FetchResult::NetworkError { error }
        }
    }
}

/// Fetches a page, logging and classifying any failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<PageResult, SkipReason> {
    let result = fetch_url(client, url).await.into_page();
    match &result {
        Ok(page) => {
            tracing::debug!("Fetched {} ({} bytes)", page.final_url, page.body.len())
        }
        Err(SkipReason::HttpStatus(status)) => {
            tracing::debug!("Received {} for {}, treating as empty", status, url)
        }
        Err(reason) => tracing::warn!("Failed to fetch {}: {}", url, reason),
    }
    result
}

/// Sends a HEAD request and reports whether the URL answers 200
pub async fn probe(client: &Client, url: &str) -> bool {
    match client.head(url).send().await {
        Ok(response) => {
            let ok = response.status() == StatusCode::OK;
            if !ok {
                tracing::debug!("HEAD {} returned {}", url, response.status());
            }
            ok
        }
        Err(e) => {
            tracing::debug!("HEAD {} failed: {}", url, e);
            false
        }
    }
}
