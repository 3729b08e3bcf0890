//! One digest run, start to finish.
//!
//! fetch → (sample fallback) → dedup → fill defaults → render → persist.
//! Every run starts from nothing: no dedup history or cache is carried over.

use crate::dedup::dedup;
use crate::feeds::{self, sample};
use crate::http::FetchFeed;
use crate::models::DigestItem;
use crate::outputs::{OutputLayout, csv, html, json, pages};
use crate::utils::ensure_dirs;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Resolved inputs for a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sources_path: PathBuf,
    pub sample_path: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// Shown in the page's `schedule` slot.
    pub schedule: String,
    /// `YYYY-MM-DD`; keys the archive and data files.
    pub date: String,
    pub timeout: Duration,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub date: String,
    pub used_sample: bool,
    pub items: Vec<DigestItem>,
}

/// Execute a full run, fetching through `fetcher`.
///
/// # Errors
///
/// Fatal conditions only: output directories that cannot be created, a
/// missing or malformed sample file when it is needed, a missing or
/// malformed template, or a failed output write. Source problems are logged
/// and never surface here.
#[instrument(level = "info", skip_all, fields(date = %config.date))]
pub async fn run<F: FetchFeed>(fetcher: &F, config: &RunConfig) -> Result<RunSummary, Box<dyn Error>> {
    let layout = OutputLayout::new(&config.output_dir);
    ensure_dirs(&layout.dirs()).await?;

    let sources = feeds::load_sources(&config.sources_path).await;
    let mut items = feeds::fetch_items(fetcher, &sources).await;

    let used_sample = items.is_empty();
    if used_sample {
        warn!("No items fetched from any source; falling back to sample data");
        items = sample::load_sample(&config.sample_path).await?;
    }

    let items: Vec<DigestItem> = dedup(items).into_iter().map(|item| item.fill_defaults()).collect();

    let template = html::load_template(&config.template_path).await?;
    let page = html::render_page(&template, &config.date, &items, &config.schedule)?;

    pages::write_index(&layout, &page).await?;
    pages::write_archive(&layout, &config.date, &page).await?;
    json::write_items(&items, &layout.json_path(&config.date)).await?;
    csv::write_items(&items, &layout.csv_path(&config.date)).await?;

    info!(items = items.len(), used_sample, "Digest run complete");
    Ok(RunSummary {
        date: config.date.clone(),
        used_sample,
        items,
    })
}
