use crate::config::types::{Config, CrawlerConfig, SourcesConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_sources(&config.sources)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 || config.max_pages > 100 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be between 1 and 100, got {}",
            config.max_pages
        )));
    }

    if config.max_follow_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-follow-pages must be >= 1, got {}",
            config.max_follow_pages
        )));
    }

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 64 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-fetches must be between 1 and 64, got {}",
            config.max_concurrent_fetches
        )));
    }

    if config.request_timeout_secs < 1 || config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "request and connect timeouts must be >= 1s".to_string(),
        ));
    }

    if config.connect_timeout_secs > config.request_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs ({}) cannot exceed request-timeout-secs ({})",
            config.connect_timeout_secs, config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.value.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent value cannot be empty".to_string(),
        ));
    }

    if config.value.chars().any(char::is_control) {
        return Err(ConfigError::Validation(
            "user-agent value cannot contain control characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates every configured source origin
fn validate_sources(sources: &SourcesConfig) -> Result<(), ConfigError> {
    validate_origin("sources.erome.base-url", &sources.erome.base_url)?;
    validate_origin("sources.bunkr.search-url", &sources.bunkr.search_url)?;
    validate_origin("sources.bunkr.album-url", &sources.bunkr.album_url)?;
    validate_origin("sources.fapello.base-url", &sources.fapello.base_url)?;
    validate_origin("sources.fapello.cdn-url", &sources.fapello.cdn_url)?;
    validate_origin("sources.jpg5.base-url", &sources.jpg5.base_url)?;
    Ok(())
}

/// Validates that a value is a bare HTTP(S) origin (no path, query or fragment)
fn validate_origin(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            key, value
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "{} has no host: '{}'",
            key, value
        )));
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must be an origin without path or query, got '{}'",
            key, value
        )));
    }

    Ok(())
}
