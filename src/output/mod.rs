//! Persistence step for the harvested link list
//!
//! Writes the sorted links to a newline-delimited UTF-8 text file, guarded by
//! an overwrite-confirmation gate. The confirmation is an injected callback so
//! callers decide how to ask (interactive stdin in the CLI, a canned answer in
//! tests). When the gate declines, nothing is fetched and nothing is written.

use crate::config::Config;
use crate::harvester::harvest_links;
use crate::Result;
use reqwest::Client;
use std::fs;
use std::path::Path;

/// Outcome of a save operation
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The harvest ran and the file was written with this many links
    Written(usize),

    /// The user declined the overwrite prompt; no fetch, no write
    Cancelled,
}

/// Harvests the link list and writes it to the configured output path
///
/// # Behavior
///
/// 1. If the output file exists and `force` is false, `confirm` decides
///    whether to proceed. A decline returns [`SaveOutcome::Cancelled`] before
///    any network request is made.
/// 2. Otherwise the harvest runs, the parent directory is created if missing,
///    and the newline-joined links replace the file content (no trailing
///    newline).
///
/// A harvest failure propagates before the write step, so the existing file
/// is never clobbered by a failed run.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the harvest
/// * `config` - The harvest and output configuration
/// * `force` - Skip the overwrite confirmation entirely
/// * `confirm` - Callback invoked with the output path when confirmation is
///   needed; returning false cancels
pub async fn save_links<F>(
    client: &Client,
    config: &Config,
    force: bool,
    confirm: F,
) -> Result<SaveOutcome>
where
    F: FnOnce(&Path) -> bool,
{
    let path = Path::new(&config.output.links_path);

    if path.exists() && !force && !confirm(path) {
        tracing::info!("Overwrite declined for {}", path.display());
        return Ok(SaveOutcome::Cancelled);
    }

    let links = harvest_links(client, config).await?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, links.join("\n"))?;
    tracing::info!("Wrote {} links to {}", links.len(), path.display());

    Ok(SaveOutcome::Written(links.len()))
}
