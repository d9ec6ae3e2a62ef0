//! Fullcast: an IMDb full-credits cast extractor
//!
//! This crate fetches the full-credits page for a configured set of titles,
//! extracts the top of the cast list (actor, character, actor id) from the
//! rendered markup, and reports the results as plain text. Pages come either
//! from a live HTTP fetch or from local fixture files standing in for one.

pub mod config;
pub mod extract;
pub mod record;
pub mod report;
pub mod runner;
pub mod source;

use thiserror::Error;

/// Main error type for fullcast operations
#[derive(Debug, Error)]
pub enum FullcastError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    Extract(#[from] extract::ExtractError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for fullcast operations
pub type Result<T> = std::result::Result<T, FullcastError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract_title_record, ExtractError};
pub use record::{CastMember, TitleRecord};
pub use source::{FetchOutcome, Source};
