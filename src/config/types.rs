use serde::Deserialize;

/// Main configuration structure for fullcast
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub extractor: ExtractorConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub titles: Vec<TitleEntry>,
}

/// Execution mode: fetch credits pages live or replay stored fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Live,
    Simulated,
}

/// Extractor behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Whether to perform live HTTP requests or read local fixture files
    pub mode: Mode,

    /// Maximum number of cast rows converted to records per title
    #[serde(rename = "actor-limit", default = "default_actor_limit")]
    pub actor_limit: usize,

    /// Directory holding `<catalog-id>.html` fixture files (simulated mode)
    #[serde(rename = "fixture-dir", default)]
    pub fixture_dir: String,

    /// Base URL the full-credits path is appended to (live mode)
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

fn default_actor_limit() -> usize {
    10
}

fn default_base_url() -> String {
    "https://www.imdb.com".to_string()
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "client-name")]
    pub client_name: String,

    /// Version of the client
    #[serde(rename = "client-version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for client-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// One configured title: a human-readable label and its catalog identifier
#[derive(Debug, Clone, Deserialize)]
pub struct TitleEntry {
    /// Display label (the reported title name comes from the markup, not
    /// from this field)
    pub name: String,

    /// Catalog identifier, e.g. "tt7366338"
    pub id: String,
}
