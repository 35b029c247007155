//! HTTP fetcher implementation
//!
//! This module handles the two GET requests of a lookup:
//! - Building an HTTP client with a browser user agent and fixed timeout
//! - Fetching a page and classifying failures
//!
//! There are no retries. A failed request ends the lookup and the user
//! decides whether to search again.

use crate::config::FetchConfig;
use crate::ProfileError;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration (user agent and timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use bdo_profile::config::FetchConfig;
/// use bdo_profile::fetcher::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body
///
/// # Error Mapping
///
/// | Condition | Error |
/// |-----------|-------|
/// | Timeout | `Network` ("Request timeout") |
/// | Connection failure | `Network` ("Connection refused") |
/// | Other transport error | `Network` |
/// | Status other than 200 | `HttpStatus` with the status text |
/// | Body read failure | `Network` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ProfileError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| network_error(url, &e))?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!("{} returned {}", url, status);
        return Err(ProfileError::HttpStatus {
            url: url.to_string(),
            status: status.to_string(),
        });
    }

    let body = response.text().await.map_err(|e| network_error(url, &e))?;
    tracing::debug!("Fetched {} ({} bytes)", url, body.len());
    Ok(body)
}

/// Fetches and parses a page
///
/// The document is `!Send`; an async caller must not `.await` again while
/// holding it.
pub async fn fetch_document(client: &Client, url: &Url) -> Result<Html, ProfileError> {
    let body = fetch_page(client, url).await?;
    Ok(Html::parse_document(&body))
}

fn network_error(url: &Url, error: &reqwest::Error) -> ProfileError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    };

    tracing::warn!("Request to {} failed: {}", url, error);

    ProfileError::Network {
        url: url.to_string(),
        message,
    }
}
