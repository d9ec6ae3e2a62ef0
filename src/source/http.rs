//! Live HTTP source
//!
//! Fetches full-credits pages over HTTP with a properly identified client.
//! Only a 200 response counts as a hit; any other status and any transport
//! error become a per-title failure outcome.

use crate::config::UserAgentConfig;
use crate::source::FetchOutcome;
use reqwest::Client;
use std::time::Duration;

/// Path pattern of a full-credits page, relative to the base URL
const CREDITS_PATH: &str = "/title/{}/fullcredits/";

/// Builds the full-credits URL for one catalog identifier
pub fn credits_url(base_url: &str, catalog_id: &str) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        CREDITS_PATH.replacen("{}", catalog_id, 1)
    )
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: ClientName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.client_name, config.client_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Live source: one GET per catalog identifier against the base URL
#[derive(Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(user_agent: &UserAgentConfig, base_url: String) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent)?,
            base_url,
        })
    }

    /// Fetches one full-credits page
    ///
    /// # Returns
    ///
    /// * `Success` - status 200, body decoded as text
    /// * `HttpError` - any non-200 status
    /// * `NetworkError` - timeout, connection failure, or body read failure
    pub async fn fetch(&self, catalog_id: &str) -> FetchOutcome {
        let url = credits_url(&self.base_url, catalog_id);

        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status();

                if status.as_u16() != 200 {
                    return FetchOutcome::HttpError {
                        status_code: status.as_u16(),
                    };
                }

                match response.text().await {
                    Ok(body) => FetchOutcome::Success {
                        status_code: status.as_u16(),
                        body,
                    },
                    Err(e) => FetchOutcome::NetworkError {
                        error: e.to_string(),
                    },
                }
            }
            Err(e) => {
                // Classify error
                if e.is_timeout() {
                    FetchOutcome::NetworkError {
                        error: "Request timeout".to_string(),
                    }
                } else if e.is_connect() {
                    FetchOutcome::NetworkError {
                        error: "Connection refused".to_string(),
                    }
                } else {
                    FetchOutcome::NetworkError {
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}
