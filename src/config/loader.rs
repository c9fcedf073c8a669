//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<ValidationError>),
}

/// Load configuration from a TOML file, apply environment overrides,
/// and validate the result.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: RelayConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Defaults plus environment overrides, for running without a config file.
pub fn config_from_env() -> Result<RelayConfig, ConfigError> {
    let mut config = RelayConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Environment variables recognized for deployment overrides. These keep
/// parity with how the service has historically been configured on PaaS
/// hosts (PORT is injected by the platform).
fn apply_env_overrides(config: &mut RelayConfig) {
    if let Some(port) = env_var("PORT") {
        let host = config
            .listener
            .bind_address
            .rsplit_once(':')
            .map(|(h, _)| h.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        config.listener.bind_address = format!("{host}:{port}");
    }
    if let Some(v) = env_var("DEFAULT_SENDER") {
        config.sender.default_from = v;
    }
    if let Some(v) = env_var("SOLAPI_KEY") {
        config.gateway.api_key = v;
    }
    if let Some(v) = env_var("SOLAPI_SECRET") {
        config.gateway.api_secret = v;
    }
    if let Some(v) = env_var("FORWARD_URL") {
        config.gateway.forward_url = v;
    }
    if let Some(v) = env_var("AUTH_TOKEN") {
        config.auth.token = v;
    }
}

fn env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) => {
            let v = v.trim().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml() {
        let config: RelayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [sender]
            default_from = "01080348069"

            [auth]
            token = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.sender.default_from, "01080348069");
        assert!(config.auth.enabled());
        // Untouched sections keep their defaults.
        assert_eq!(config.gateway.timeout_secs, 15);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(!config.auth.enabled());
    }
}
