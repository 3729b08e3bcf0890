//! Bundled sample items.
//!
//! Used only when no configured source produced anything. There is no
//! fallback behind this one, so failures here end the run.

use crate::models::FeedItem;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Load the sample items from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// item-shaped objects.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_sample(path: &Path) -> Result<Vec<FeedItem>, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        error!(error = %e, "Could not read sample data");
        format!("reading sample data {}: {e}", path.display())
    })?;
    let items: Vec<FeedItem> = serde_json::from_str(&raw).map_err(|e| {
        error!(error = %e, "Sample data is malformed");
        format!("parsing sample data {}: {e}", path.display())
    })?;
    info!(count = items.len(), "Loaded sample items");
    Ok(items)
}
