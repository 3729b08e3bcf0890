//! Utility functions for run dates, string truncation, and file system setup.
//!
//! This module provides helper functions used throughout the application:
//! - Run-date resolution (UTC today or an explicit override)
//! - Character-safe prefixes for date/timestamp slicing and log previews
//! - Output directory creation and writability checks

use chrono::{NaiveDate, Utc};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};

/// Resolve the run date as `YYYY-MM-DD`.
///
/// With no override the current UTC calendar date is used. An override must
/// parse as an ISO date; it is returned in canonical form.
///
/// # Errors
///
/// Returns an error if `override_date` is not a valid `YYYY-MM-DD` date.
pub fn run_date(override_date: Option<&str>) -> Result<String, Box<dyn Error>> {
    let date = match override_date {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|e| format!("invalid run date {raw:?}: {e}"))?,
        None => Utc::now().date_naive(),
    };
    debug!(%date, "Resolved run date");
    Ok(date.format("%Y-%m-%d").to_string())
}

/// First `n` characters of `s` (not bytes).
///
/// Shorter strings come back whole. Used for the date part of a publish
/// time (`n = 10`) and its display precision (`n = 19`).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(prefix_chars("2024-01-01T08:00:00Z", 10), "2024-01-01");
/// assert_eq!(prefix_chars("昨天", 10), "昨天");
/// ```
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and the number
/// of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let head = prefix_chars(s, max);
    if head.len() == s.len() {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", head, s.len() - head.len())
    }
}

/// Create every directory in `dirs` (with parents), then probe that the
/// first one is writable.
///
/// Existing directories are fine. The probe creates and removes a small
/// file so that permission problems surface before any output is produced.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the probe write fails.
#[instrument(level = "info", skip_all, fields(count = dirs.len()))]
pub async fn ensure_dirs(dirs: &[PathBuf]) -> Result<(), Box<dyn Error>> {
    for dir in dirs {
        fs::create_dir_all(dir).await?;
        debug!(path = %dir.display(), "Ensured directory");
    }
    if let Some(first) = dirs.first() {
        probe_writable(first).await?;
        info!(path = %first.display(), "Output directory is writable");
    }
    Ok(())
}

async fn probe_writable(dir: &Path) -> Result<(), Box<dyn Error>> {
    let probe_path = dir.join("..__probe_write__");
    fs::write(&probe_path, b"").await?;
    let _ = fs::remove_file(&probe_path).await;
    Ok(())
}
