//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the listen port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable carrying the upstream basic-auth username.
pub const ENV_USERNAME: &str = "GH_USERNAME";
/// Environment variable carrying the upstream basic-auth token.
pub const ENV_TOKEN: &str = "GH_TOKEN";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} not set")]
    MissingEnv(&'static str),

    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: defaults, then the optional TOML file, then the
/// process environment, then validation.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    let config = match path {
        Some(path) => load_file(path)?,
        None => ProxyConfig::default(),
    };
    let config = apply_env(config, |key| std::env::var(key).ok())?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML configuration file without environment overlay.
pub fn load_file(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Overlay environment values onto `config`.
///
/// `lookup` abstracts `std::env::var` so the rules can be exercised
/// without touching the process environment. Empty values count as unset.
pub fn apply_env<F>(mut config: ProxyConfig, lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(port) = get(ENV_PORT) {
        config.listener.port = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
    }

    config.upstream.username = get(ENV_USERNAME).ok_or(ConfigError::MissingEnv(ENV_USERNAME))?;
    config.upstream.token = get(ENV_TOKEN).ok_or(ConfigError::MissingEnv(ENV_TOKEN))?;

    Ok(config)
}
