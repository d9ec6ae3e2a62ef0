use crate::config::types::{Config, ExtractorConfig, Mode, TitleEntry, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_extractor_config(&config.extractor)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_titles(&config.titles)?;
    Ok(())
}

/// Validates extractor configuration
fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    if config.actor_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "actor_limit must be >= 1, got {}",
            config.actor_limit
        )));
    }

    if config.mode == Mode::Simulated && config.fixture_dir.is_empty() {
        return Err(ConfigError::Validation(
            "fixture_dir cannot be empty in simulated mode".to_string(),
        ));
    }

    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use an HTTP(S) scheme, got '{}'",
            base.scheme()
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate client name: non-empty, alphanumeric + hyphens only
    if config.client_name.is_empty() {
        return Err(ConfigError::Validation(
            "client_name cannot be empty".to_string(),
        ));
    }

    if !config
        .client_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "client_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.client_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates the configured title list
fn validate_titles(titles: &[TitleEntry]) -> Result<(), ConfigError> {
    if titles.is_empty() {
        return Err(ConfigError::Validation(
            "at least one [[titles]] entry is required".to_string(),
        ));
    }

    for entry in titles {
        if entry.name.is_empty() {
            return Err(ConfigError::Validation(
                "title name cannot be empty".to_string(),
            ));
        }

        if entry.id.is_empty() {
            return Err(ConfigError::Validation(format!(
                "title '{}' has an empty catalog id",
                entry.name
            )));
        }

        // The id is spliced into a URL path and a fixture file name
        if entry.id.contains('/') {
            return Err(ConfigError::Validation(format!(
                "catalog id '{}' must not contain '/'",
                entry.id
            )));
        }
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact_email cannot be empty".to_string(),
        ));
    }

    // Basic email format check: must contain @ and have text on both sides
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    // Domain part should contain at least one dot
    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}
