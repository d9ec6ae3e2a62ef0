//! Sequential per-title run loop
//!
//! Titles are processed strictly in configured order, one at a time. Fetch
//! and extraction failures are logged and skip only the title that caused
//! them; the loop itself never aborts because of one title.

use crate::config::Config;
use crate::extract::extract_title_record;
use crate::record::TitleRecord;
use crate::source::{credits_url, FetchOutcome, Source};
use crate::FullcastError;

/// Fetches and extracts every configured title, in order
///
/// # Arguments
///
/// * `config` - The validated run configuration
///
/// # Returns
///
/// * `Ok(Vec<TitleRecord>)` - One record per title that fetched and
///   extracted cleanly, in configured order
/// * `Err(FullcastError)` - Only for run-level setup failures (HTTP client
///   construction); never for a single title's failure
pub async fn run(config: &Config) -> Result<Vec<TitleRecord>, FullcastError> {
    let source = Source::from_config(config)?;
    let limit = config.extractor.actor_limit;

    let mut records = Vec::new();

    for title in &config.titles {
        tracing::info!(
            "Mode: {} - Requesting {}: {}",
            source.mode_label(),
            title.name,
            credits_url(&config.extractor.base_url, &title.id)
        );

        let body = match source.fetch(&title.id).await {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::HttpError { status_code } => {
                tracing::warn!(
                    "Failed to retrieve data for {} ({}). Status code: {}",
                    title.name,
                    title.id,
                    status_code
                );
                continue;
            }
            FetchOutcome::NetworkError { error } => {
                tracing::warn!(
                    "Failed to retrieve data for {} ({}): {}",
                    title.name,
                    title.id,
                    error
                );
                continue;
            }
            FetchOutcome::MissingFixture { path } => {
                tracing::warn!(
                    "No fixture for {} ({}): {}",
                    title.name,
                    title.id,
                    path.display()
                );
                continue;
            }
        };

        match extract_title_record(&body, &title.id, limit) {
            Ok(record) => {
                tracing::debug!(
                    "Extracted {} cast members for {} ({})",
                    record.members.len(),
                    record.title_name,
                    title.id
                );
                records.push(record);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to extract cast for {} ({}): {}",
                    title.name,
                    title.id,
                    e
                );
            }
        }
    }

    tracing::info!("All responses processed.");

    Ok(records)
}
