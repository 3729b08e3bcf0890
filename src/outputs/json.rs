//! JSON export of the day's items.
//!
//! Items are written as a pretty-printed array (two-space indent). Non-ASCII
//! text is kept literal, not `\u`-escaped.

use crate::models::DigestItem;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `items` to the pretty-printed export form.
pub fn to_json(items: &[DigestItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}

/// Write `items` to `path`, replacing any previous file.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_items(items: &[DigestItem], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = to_json(items)?;
    if let Err(e) = fs::write(path, json).await {
        error!(error = %e, "Failed to write JSON export");
        return Err(e.into());
    }
    info!(count = items.len(), "Wrote JSON export");
    Ok(())
}
