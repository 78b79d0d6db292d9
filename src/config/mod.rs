//! Environment-backed configuration.

use crate::error::{MentorError, Result};

/// Credential and endpoint configuration for a session.
///
/// Resolution: explicit setters win over environment variables. A missing
/// API key only becomes an error once a session actually needs it, via
/// [`require_api_key`](MentorConfig::require_api_key).
#[derive(Debug, Clone, Default)]
pub struct MentorConfig {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl MentorConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (`OPENAI_API_KEY`, `OPENAI_BASE_URL`),
    /// reading a `.env` file first if one is present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL").ok().filter(|u| !u.is_empty()),
        }
    }

    /// Set the API key explicitly.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the endpoint base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The API key, or the fatal configuration error raised at session
    /// construction when the credential is absent.
    pub fn require_api_key(&self) -> Result<String> {
        self.api_key.clone().ok_or_else(|| {
            MentorError::Configuration("OPENAI_API_KEY is not set - check your .env file".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_is_returned() {
        let config = MentorConfig::new().with_api_key("sk-test");
        assert_eq!(config.require_api_key().unwrap(), "sk-test");
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let config = MentorConfig::new();
        let err = config.require_api_key().unwrap_err();
        assert!(matches!(err, MentorError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "OPENAI_API_KEY is not set - check your .env file"
        );
    }

    #[test]
    fn base_url_defaults_to_none() {
        let config = MentorConfig::new().with_api_key("sk-test");
        assert_eq!(config.base_url(), None);
    }
}
