//! Client configuration and loading

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.convai.dev/api/v1";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const ENV_API_KEY: &str = "CONVAI_API_KEY";
pub const ENV_BASE_URL: &str = "CONVAI_BASE_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "CONVAI_TIMEOUT_SECONDS";

/// Configuration for the API client
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ClientConfig {
    /// Bearer token sent with every request
    #[validate(custom = "not_blank")]
    pub api_key: String,

    /// API root, without a trailing slash
    #[validate(url)]
    pub base_url: String,

    pub timeout_seconds: u64,

    pub user_agent: String,
}

impl ClientConfig {
    /// Surrounding whitespace is stripped from `api_key`
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_API_KEY.to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECONDS) {
            let seconds = timeout.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECONDS.to_string(),
                message: format!("expected a number of seconds, got {:?}", timeout),
            })?;
            config = config.with_timeout_seconds(seconds);
        }

        config.check()?;
        tracing::debug!(base_url = %config.base_url, "Loaded client configuration");
        Ok(config)
    }

    /// Validate field constraints
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
            fields.sort_unstable();
            ConfigError::InvalidValue {
                key: fields.join(", "),
                message: errors.to_string(),
            }
        })
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn default_user_agent() -> String {
    format!("convai-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("convai-rs/"));
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "secret"),
            (ENV_BASE_URL, "http://localhost:8080/api/v1/"),
            (ENV_TIMEOUT_SECONDS, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_missing_api_key() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == ENV_API_KEY));

        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let config = ClientConfig::new("  secret \n");
        assert_eq!(config.api_key, "secret");

        let err = ClientConfig::new(" \t ").check().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "api_key"));

        let mut config = ClientConfig::new("secret");
        config.api_key = "   ".to_string();
        assert!(config.check().is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "secret"),
            (ENV_TIMEOUT_SECONDS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_TIMEOUT_SECONDS));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "secret"),
            (ENV_BASE_URL, "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "base_url"));
    }
}
