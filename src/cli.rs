//! Command-line interface definitions for the digest generator.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables,
//! and all of them have defaults, so a bare invocation from the project root works.

use crate::http::DEFAULT_TIMEOUT;
use crate::pipeline::RunConfig;
use crate::utils::run_date;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

/// Schedule text shown on the page when none is configured.
pub const DEFAULT_SCHEDULE: &str = "00:30 UTC / 08:30 Beijing";

/// Command-line arguments for the digest generator.
///
/// Paths left unset are resolved against `--root`:
///
/// | Input | Default |
/// |-------|---------|
/// | sources | `<root>/data/sources.json` |
/// | sample | `<root>/data/sample_data.json` |
/// | template | `<root>/templates/page.html.j2` |
/// | output | `<root>/docs` |
///
/// # Examples
///
/// ```sh
/// # Run from the project root
/// daily_digest
///
/// # Rebuild a past day into a scratch directory
/// daily_digest --date 2024-01-01 -o /tmp/docs
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Project root that holds data/, templates/ and docs/
    #[arg(short, long, env = "DIGEST_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// JSON array of {name, url} feed sources
    #[arg(long, env = "DIGEST_SOURCES")]
    pub sources: Option<PathBuf>,

    /// JSON array of fallback items, used when no source yields anything
    #[arg(long, env = "DIGEST_SAMPLE")]
    pub sample: Option<PathBuf>,

    /// Page template with {date}, {cards} and {schedule} slots
    #[arg(short, long, env = "DIGEST_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Output directory for index.html, archive/ and data/
    #[arg(short, long, env = "DIGEST_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Human-readable run schedule shown on the page
    #[arg(long, env = "DAILY_SCHEDULE", default_value = DEFAULT_SCHEDULE)]
    pub schedule: String,

    /// Run date (YYYY-MM-DD); defaults to today in UTC
    #[arg(long, env = "DIGEST_DATE")]
    pub date: Option<String>,

    /// Per-source HTTP timeout in seconds
    #[arg(
        long,
        env = "DIGEST_FETCH_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

impl Cli {
    /// Resolve defaults and validate the run date.
    ///
    /// # Errors
    ///
    /// Returns an error if `--date` is not a valid `YYYY-MM-DD` date.
    pub fn into_config(self) -> Result<RunConfig, Box<dyn Error>> {
        let date = run_date(self.date.as_deref())?;
        Ok(RunConfig {
            sources_path: self
                .sources
                .unwrap_or_else(|| self.root.join("data").join("sources.json")),
            sample_path: self
                .sample
                .unwrap_or_else(|| self.root.join("data").join("sample_data.json")),
            template_path: self
                .template
                .unwrap_or_else(|| self.root.join("templates").join("page.html.j2")),
            output_dir: self.output_dir.unwrap_or_else(|| self.root.join("docs")),
            schedule: self.schedule,
            date,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_resolve_against_root() {
        let cli = Cli::parse_from(["daily_digest", "--root", "/srv/site", "--date", "2024-01-01"]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.sources_path, PathBuf::from("/srv/site/data/sources.json"));
        assert_eq!(config.sample_path, PathBuf::from("/srv/site/data/sample_data.json"));
        assert_eq!(config.template_path, PathBuf::from("/srv/site/templates/page.html.j2"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/site/docs"));
        assert_eq!(config.date, "2024-01-01");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_cli_explicit_paths() {
        let cli = Cli::parse_from([
            "daily_digest",
            "-o",
            "/tmp/out",
            "-t",
            "/tmp/page.html",
            "--sources",
            "/tmp/s.json",
            "--schedule",
            "hourly",
            "--timeout-secs",
            "3",
        ]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.template_path, PathBuf::from("/tmp/page.html"));
        assert_eq!(config.sources_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.schedule, "hourly");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        let res = Cli::try_parse_from(["daily_digest", "--timeout-secs", "0"]);
        assert!(res.is_err());
        let cli = Cli::try_parse_from(["daily_digest", "--timeout-secs", "1"]).unwrap();
        assert_eq!(cli.timeout_secs, 1);
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let cli = Cli::parse_from(["daily_digest", "--date", "01/02/2024"]);
        assert!(cli.into_config().is_err());
    }
}
