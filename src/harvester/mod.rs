//! Harvester module for fetching and filtering archive links
//!
//! This module contains the core harvest logic:
//! - One HTTP GET against the portal page
//! - Anchor extraction and href resolution
//! - The three-predicate link filter (extension, year, path segment)
//! - Deduplication and lexicographic ordering

mod fetcher;
mod filter;
mod parser;

pub use fetcher::{build_http_client, fetch_page};
pub use filter::LinkFilter;
pub use parser::extract_links;

use crate::config::Config;
use crate::Result;
use reqwest::Client;
use std::collections::BTreeSet;
use url::Url;

/// Runs the complete harvest: fetch, parse, filter, dedup, sort
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Unique matching absolute URLs in lexicographic order
/// * `Err(HarvestError)` - The fetch failed; no partial result is produced
pub async fn harvest_links(client: &Client, config: &Config) -> Result<Vec<String>> {
    let base_url = Url::parse(&config.source.base_url)?;
    let filter = LinkFilter::new(&config.filter);

    let body = fetch_page(client, &config.source.page_url).await?;

    // BTreeSet gives dedup and lexicographic order in one pass
    let links: BTreeSet<String> = extract_links(&body, &base_url)
        .into_iter()
        .filter(|url| filter.matches(url))
        .collect();

    tracing::info!(
        "Harvested {} unique matching links from {}",
        links.len(),
        config.source.page_url
    );

    Ok(links.into_iter().collect())
}
