//! Source providers for credits pages
//!
//! A source resolves a catalog identifier to the raw credits markup. Two
//! implementations satisfy the same contract: a live HTTP fetch against the
//! configured base URL, and a fixture lookup replaying stored documents.
//! Which one runs is a configuration decision, not ambient state.

mod fixture;
mod http;

pub use fixture::FixtureSource;
pub use http::{build_http_client, credits_url, HttpSource};

use crate::config::{Config, Mode};
use std::path::PathBuf;

/// Result of a fetch operation
///
/// Everything except `Success` is a per-title failure: the caller logs it,
/// skips the title, and continues with the rest of the run.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Status 200 with the document body
    Success {
        /// HTTP status code (always 200 here)
        status_code: u16,
        /// Raw page markup, decoded as UTF-8
        body: String,
    },

    /// The server answered with a non-200 status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure)
    NetworkError {
        /// Error description
        error: String,
    },

    /// No fixture file exists for the requested identifier
    MissingFixture {
        /// The path that was tried
        path: PathBuf,
    },
}

/// A configured source provider: live fetch or fixture replay
#[derive(Debug)]
pub enum Source {
    Live(HttpSource),
    Simulated(FixtureSource),
}

impl Source {
    /// Builds the source selected by the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Source)` - Ready-to-use provider
    /// * `Err(reqwest::Error)` - Live mode only: HTTP client construction failed
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        match config.extractor.mode {
            Mode::Live => Ok(Source::Live(HttpSource::new(
                &config.user_agent,
                config.extractor.base_url.clone(),
            )?)),
            Mode::Simulated => Ok(Source::Simulated(FixtureSource::new(
                &config.extractor.fixture_dir,
            ))),
        }
    }

    /// Fetches the credits document for one catalog identifier
    pub async fn fetch(&self, catalog_id: &str) -> FetchOutcome {
        match self {
            Source::Live(source) => source.fetch(catalog_id).await,
            Source::Simulated(source) => source.fetch(catalog_id),
        }
    }

    /// Human-readable mode label for log lines
    pub fn mode_label(&self) -> &'static str {
        match self {
            Source::Live(_) => "live",
            Source::Simulated(_) => "simulated",
        }
    }
}
