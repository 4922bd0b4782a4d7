use crate::config::types::{Config, FilterConfig, OutputConfig, SourceConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_filter_config(&config.filter)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates source page configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    Url::parse(&config.page_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid page_url: {}", e)))?;

    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    // A base without a host (e.g. "data:") cannot resolve relative hrefs
    if base.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' cannot be used as a base for relative hrefs",
            config.base_url
        )));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates filter configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    if config.extension.is_empty() {
        return Err(ConfigError::Validation(
            "filter extension cannot be empty".to_string(),
        ));
    }

    if config.path_segment.is_empty() {
        return Err(ConfigError::Validation(
            "filter path_segment cannot be empty".to_string(),
        ));
    }

    if config.years.is_empty() {
        return Err(ConfigError::Validation(
            "filter years must contain at least one entry".to_string(),
        ));
    }

    for year in &config.years {
        if year.is_empty() {
            return Err(ConfigError::Validation(
                "filter years entries cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.links_path.is_empty() {
        return Err(ConfigError::Validation(
            "links_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_page_url() {
        let mut config = Config::default();
        config.source.page_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.source.base_url = "::::".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_years_rejected() {
        let mut config = Config::default();
        config.filter.years.clear();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_extension_rejected() {
        let mut config = Config::default();
        config.filter.extension.clear();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_links_path_rejected() {
        let mut config = Config::default();
        config.output.links_path.clear();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
