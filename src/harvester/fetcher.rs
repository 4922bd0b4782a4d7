//! HTTP fetcher for the portal page
//!
//! One GET request against the configured page URL, bounded by the configured
//! timeout. No retry, no redirect bookkeeping beyond the client defaults: any
//! network failure, timeout, or non-success status aborts the whole harvest.

use crate::{HarvestError, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for the single page fetch
///
/// # Arguments
///
/// * `timeout_secs` - Total request timeout in seconds
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(HarvestError)` - Failed to build client
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()?;
    Ok(client)
}

/// Fetches the portal page and returns its body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(HarvestError)` - Timeout, connection failure, or non-success status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    tracing::debug!("GET {}", url);

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            HarvestError::Timeout {
                url: url.to_string(),
            }
        } else {
            HarvestError::Http {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| HarvestError::Http {
        url: url.to_string(),
        source: e,
    })
}
