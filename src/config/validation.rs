//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require upstream credentials
//! - Validate value ranges (timeouts > 0)
//! - Check the upstream base URL is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream username is empty")]
    MissingUsername,

    #[error("upstream token is empty")]
    MissingToken,

    #[error("upstream base_url '{0}' is not an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("upstream timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a fully layered configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let upstream = &config.upstream;

    if upstream.username.is_empty() {
        errors.push(ValidationError::MissingUsername);
    }
    if upstream.token.is_empty() {
        errors.push(ValidationError::MissingToken);
    }

    match Url::parse(&upstream.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(upstream.base_url.clone())),
    }

    if upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
