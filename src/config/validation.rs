use crate::config::types::{Config, FetchConfig, LabelConfig, OutputConfig, SiteConfig};
use crate::extract::ProfileSelectors;
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_site_config(&config.site)?;
    validate_fetch_config(&config.fetch)?;
    ProfileSelectors::compile(&config.selectors)?;
    validate_label_config(&config.labels)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> ConfigResult<()> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' has no host",
            config.base_url
        )));
    }

    if config.locale.trim().is_empty() {
        return Err(ConfigError::Validation("locale cannot be empty".to_string()));
    }

    if config.region.trim().is_empty() {
        return Err(ConfigError::Validation("region cannot be empty".to_string()));
    }

    Ok(())
}

/// Validates HTTP settings
fn validate_fetch_config(config: &FetchConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 120, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates the label strings used for extraction
fn validate_label_config(config: &LabelConfig) -> ConfigResult<()> {
    let labels = [
        ("creation_date", &config.creation_date),
        ("papd", &config.papd),
        ("energy", &config.energy),
        ("contribution", &config.contribution),
        ("level_marker", &config.level_marker),
        ("main_character", &config.main_character),
    ];

    for (name, value) in labels {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "label '{}' cannot be empty",
                name
            )));
        }
    }

    if config.level_marker.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "level_marker cannot contain whitespace, got '{}'",
            config.level_marker
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.log_file.trim().is_empty() {
        return Err(ConfigError::Validation(
            "log_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}
