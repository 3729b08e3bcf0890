//! # Daily Digest
//!
//! A static digest generator that pulls items from a list of JSON feed
//! endpoints and publishes them as a dated HTML page with JSON and CSV
//! exports next to it.
//!
//! ## Features
//!
//! - Reads feed sources (name + URL) from a JSON file; placeholder URLs are skipped
//! - Accepts feeds shaped as a bare array or as an object with an `items` array
//! - Deduplicates items by a `source|title|date` fingerprint
//! - Falls back to bundled sample data when no source yields anything
//! - Writes `index.html`, a dated archive page, and dated JSON/CSV exports
//!
//! ## Usage
//!
//! ```sh
//! daily_digest --root . --output-dir ./docs
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: Load sources and GET each one, sequentially
//! 2. **Deduplication**: Keep the first item per fingerprint
//! 3. **Defaults**: Fill tags, idea title and outline where absent
//! 4. **Output**: Render the page and write HTML, JSON and CSV files

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod dedup;
mod feeds;
mod http;
mod models;
mod outputs;
mod pipeline;
mod utils;

use cli::Cli;
use http::HttpFetcher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_digest starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");
    let config = args.into_config()?;
    info!(
        date = %config.date,
        output_dir = %config.output_dir.display(),
        sources = %config.sources_path.display(),
        "Resolved configuration"
    );

    let fetcher = HttpFetcher::new(config.timeout)?;
    let summary = match pipeline::run(&fetcher, &config).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Digest run failed");
            return Err(e);
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        items = summary.items.len(),
        used_sample = summary.used_sample,
        "Execution complete"
    );

    println!("Generated for {}", summary.date);
    Ok(())
}
