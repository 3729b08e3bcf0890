//! Page files: the current index and the dated archive.
//!
//! Both get the same rendered document. The index is replaced on every
//! run; an archive page is only replaced by a rerun on the same date.

use super::OutputLayout;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `html` to `<output>/index.html`.
#[instrument(level = "info", skip_all, fields(root = %layout.root().display()))]
pub async fn write_index(layout: &OutputLayout, html: &str) -> Result<(), Box<dyn Error>> {
    write_page(&layout.index_path(), html).await?;
    info!("Updated current index page");
    Ok(())
}

/// Write `html` to `<output>/archive/<date>.html`.
#[instrument(level = "info", skip_all, fields(root = %layout.root().display(), %date))]
pub async fn write_archive(layout: &OutputLayout, date: &str, html: &str) -> Result<(), Box<dyn Error>> {
    write_page(&layout.archive_path(date), html).await?;
    info!("Wrote archive page");
    Ok(())
}

async fn write_page(path: &Path, html: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::write(path, html).await {
        error!(path = %path.display(), error = %e, "Failed writing page");
        return Err(e.into());
    }
    info!(path = %path.display(), bytes = html.len(), "Wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ensure_dirs;

    #[tokio::test]
    async fn test_index_overwritten_archive_keyed_by_date() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(tmp.path().join("docs"));
        ensure_dirs(&layout.dirs()).await.unwrap();

        write_index(&layout, "day one").await.unwrap();
        write_archive(&layout, "2024-01-01", "day one").await.unwrap();
        write_index(&layout, "day two").await.unwrap();
        write_archive(&layout, "2024-01-02", "day two").await.unwrap();

        let read = |p: std::path::PathBuf| std::fs::read_to_string(p).unwrap();
        assert_eq!(read(layout.index_path()), "day two");
        assert_eq!(read(layout.archive_path("2024-01-01")), "day one");
        assert_eq!(read(layout.archive_path("2024-01-02")), "day two");
    }

    #[tokio::test]
    async fn test_missing_archive_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(tmp.path().join("not-created"));
        assert!(write_archive(&layout, "2024-01-01", "x").await.is_err());
    }
}
