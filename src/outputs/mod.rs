//! Output generation for the digest page and data exports.
//!
//! This module contains submodules responsible for writing the filled items
//! to their output formats:
//!
//! # Submodules
//!
//! - [`html`]: Renders the page from the template and per-item cards
//! - [`pages`]: Writes the rendered page to the current index and the archive
//! - [`json`]: Writes items as a pretty-printed JSON array
//! - [`csv`]: Writes items as a seven-column CSV table
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── index.html              # Current digest, overwritten every run
//! ├── assets/                 # Static files referenced by the template
//! ├── archive/
//! │   └── 2025-05-06.html     # Dated snapshot
//! └── data/
//!     ├── 2025-05-06.json
//!     └── 2025-05-06.csv
//! ```

pub mod csv;
pub mod html;
pub mod json;
pub mod pages;

use std::path::{Path, PathBuf};

/// Paths of everything a run writes, rooted at one output directory.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.root.join("archive")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    /// Every directory the run needs, root first.
    pub fn dirs(&self) -> Vec<PathBuf> {
        vec![self.root.clone(), self.archive_dir(), self.data_dir(), self.assets_dir()]
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join("index.html")
    }

    pub fn archive_path(&self, date: &str) -> PathBuf {
        self.archive_dir().join(format!("{date}.html"))
    }

    pub fn json_path(&self, date: &str) -> PathBuf {
        self.data_dir().join(format!("{date}.json"))
    }

    pub fn csv_path(&self, date: &str) -> PathBuf {
        self.data_dir().join(format!("{date}.csv"))
    }
}
