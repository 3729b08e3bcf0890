//! HTTP access to feed endpoints.
//!
//! # Architecture
//!
//! - [`FetchFeed`]: Core trait for "give me the body behind this URL"
//! - [`HttpFetcher`]: `reqwest`-backed implementation with a fixed timeout
//!
//! The pipeline is generic over [`FetchFeed`], so it can be driven by an
//! in-memory implementation in tests. There is no retry layer:
//! a failed source is logged and skipped for this run.

use reqwest::Client;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Default per-request timeout for feed endpoints.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for fetching the text body of a feed endpoint.
pub trait FetchFeed {
    /// GET `url` and return its body as text.
    ///
    /// Invalid UTF-8 must be replaced, not rejected.
    async fn fetch_text(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// [`FetchFeed`] backed by a blocking-per-call `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl FetchFeed for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let res = async {
            let resp = self.client.get(url).send().await?.error_for_status()?;
            let bytes = resp.bytes().await?;
            Ok::<_, reqwest::Error>(String::from_utf8_lossy(&bytes).into_owned())
        }
        .await;
        let dt = t0.elapsed();

        match res {
            Ok(body) => {
                debug!(elapsed_ms = dt.as_millis() as u128, bytes = body.len(), "Fetched feed body");
                Ok(body)
            }
            Err(e) => {
                warn!(elapsed_ms = dt.as_millis() as u128, error = %e, "Feed request failed");
                Err(Box::new(e))
            }
        }
    }
}
