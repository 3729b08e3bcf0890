//! Feed sources: loading the source list and fetching items from it.
//!
//! Each configured source goes through the same steps:
//!
//! 1. **Skip**: placeholder or empty URLs are ignored silently
//! 2. **Fetch**: one GET through a [`FetchFeed`] implementation
//! 3. **Normalize**: the body is parsed by [`normalize::parse_feed`]
//!
//! Sources are processed one at a time, in configuration order. A failure in
//! any step is logged against the source name and contributes zero items;
//! it never aborts the run.
//!
//! # Submodules
//!
//! - [`normalize`]: Alias-based mapping of raw entries onto `FeedItem`
//! - [`sample`]: Bundled fallback items used when every source comes back empty

pub mod normalize;
pub mod sample;

use crate::http::FetchFeed;
use crate::models::{FeedItem, Source};
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Load the list of configured sources.
///
/// A missing, unreadable, or malformed file yields an empty list so the run
/// can fall through to the sample data.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_sources(path: &Path) -> Vec<Source> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "Could not read sources file; continuing with no sources");
            return Vec::new();
        }
    };
    let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Sources file is not a JSON array; continuing with no sources");
            return Vec::new();
        }
    };

    let sources: Vec<Source> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Source>(entry) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed source entry");
                None
            }
        })
        .collect();
    info!(count = sources.len(), "Loaded sources");
    sources
}

/// Fetch and normalize items from every non-placeholder source.
///
/// # Returns
///
/// All items across all sources, in source-then-entry order.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn fetch_items<F: FetchFeed>(fetcher: &F, sources: &[Source]) -> Vec<FeedItem> {
    let items: Vec<FeedItem> = stream::iter(sources)
        .then(|source| async move {
            let name = source.name.as_deref().unwrap_or("");
            if source.is_placeholder() {
                debug!(source = name, "Skipping placeholder source");
                return Vec::new();
            }
            match fetch_source(fetcher, source).await {
                Ok(items) => {
                    info!(source = name, count = items.len(), "Fetched source");
                    items
                }
                Err(e) => {
                    warn!(source = name, error = %e, "Fetch failed; skipping source");
                    Vec::new()
                }
            }
        })
        .flat_map(stream::iter)
        .collect()
        .await;

    info!(count = items.len(), "Fetched items from all sources");
    items
}

/// Fetch a single source
async fn fetch_source<F: FetchFeed>(fetcher: &F, source: &Source) -> Result<Vec<FeedItem>, Box<dyn Error>> {
    let url = source.url.as_deref().unwrap_or_default();
    let body = fetcher.fetch_text(url).await?;
    normalize::parse_feed(source.name.as_deref(), &body).map_err(|e| {
        debug!(body_preview = %truncate_for_log(&body, 200), "Unparseable feed body");
        e.into()
    })
}
