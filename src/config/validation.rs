//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs actually parse
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("gateway.forward_url {0:?} is not a valid URL")]
    InvalidForwardUrl(String),

    #[error("gateway.{0} must not be zero")]
    ZeroTimeout(&'static str),

    #[error("timeouts.request_secs must not be zero")]
    ZeroRequestTimeout,

    #[error("gateway.api_key and gateway.api_secret must be set together")]
    PartialCredentials,
}

/// Validate a loaded configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if !config.gateway.forward_url.is_empty() && Url::parse(&config.gateway.forward_url).is_err() {
        errors.push(ValidationError::InvalidForwardUrl(
            config.gateway.forward_url.clone(),
        ));
    }

    if config.gateway.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeout_secs"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.gateway.api_key.is_empty() != config.gateway.api_secret.is_empty() {
        errors.push(ValidationError::PartialCredentials);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.gateway.forward_url = "::nope::".to_string();
        config.gateway.timeout_secs = 0;
        config.gateway.api_key = "key-without-secret".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::PartialCredentials));
    }

    #[test]
    fn test_empty_forward_url_is_fine() {
        let config = RelayConfig::default();
        assert!(config.gateway.forward_url.is_empty());
        assert!(validate_config(&config).is_ok());
    }
}
