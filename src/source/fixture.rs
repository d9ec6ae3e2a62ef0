//! Fixture-backed source
//!
//! Replays stored credits documents instead of talking to the network. One
//! file per catalog identifier, named `<id>.html`, read as UTF-8. A present
//! file is reported exactly like a 200 response so the rest of the pipeline
//! cannot tell the two sources apart.

use crate::source::FetchOutcome;
use std::path::{Path, PathBuf};

/// Simulated source resolving identifiers to local fixture files
#[derive(Debug)]
pub struct FixtureSource {
    dir: PathBuf,
}

impl FixtureSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the fixture file for one catalog identifier
    pub fn fixture_path(&self, catalog_id: &str) -> PathBuf {
        self.dir.join(format!("{}.html", catalog_id))
    }

    /// Reads the fixture standing in for a live response
    ///
    /// # Returns
    ///
    /// * `Success` - file found, body read as UTF-8, status fabricated as 200
    /// * `MissingFixture` - no readable file for this identifier
    pub fn fetch(&self, catalog_id: &str) -> FetchOutcome {
        let path = self.fixture_path(catalog_id);

        match std::fs::read_to_string(&path) {
            Ok(body) => FetchOutcome::Success {
                status_code: 200,
                body,
            },
            Err(_) => FetchOutcome::MissingFixture { path },
        }
    }
}
