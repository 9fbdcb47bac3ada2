use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Checks that the base URL is a usable http(s) origin, the root path is
/// absolute, the fetch settings are sane, and the selector class names are
/// plain single classes.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let base = Url::parse(&config.site.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.site.base_url, e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must be http or https, got {}",
            base.scheme()
        )));
    }

    if base.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url has no host: {}",
            config.site.base_url
        )));
    }

    if !config.site.root_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "root-path must start with '/', got {:?}",
            config.site.root_path
        )));
    }

    if config.fetch.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    if config.fetch.max_concurrent_requests == 0 {
        return Err(ConfigError::Validation(
            "max-concurrent-requests must be at least 1".to_string(),
        ));
    }

    if config.fetch.timeout_seconds == 0 {
        return Err(ConfigError::Validation(
            "timeout-seconds must be at least 1".to_string(),
        ));
    }

    for (key, class) in [
        ("product-item", &config.selectors.product_item),
        ("product-name", &config.selectors.product_name),
        ("product-price", &config.selectors.product_price),
        ("section-link", &config.selectors.section_link),
    ] {
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "selector {} must be a single non-empty class name, got {:?}",
                key, class
            )));
        }
    }

    if config.output.table_dir.is_empty() {
        return Err(ConfigError::Validation(
            "table-dir must not be empty".to_string(),
        ));
    }

    if config.output.backup_path.is_empty() {
        return Err(ConfigError::Validation(
            "backup-path must not be empty".to_string(),
        ));
    }

    Ok(())
}
