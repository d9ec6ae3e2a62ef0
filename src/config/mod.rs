//! Configuration module for fullcast
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use fullcast::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Extracting up to {} actors per title", config.extractor.actor_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ExtractorConfig, Mode, TitleEntry, UserAgentConfig};

// Re-export parser functions
pub use parser::load_config;
