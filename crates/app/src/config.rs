//! Client configuration — a JSON document embedded in the host page.
//!
//! Every field has a default, so an absent document is valid.

use std::time::Duration;

use chargehub_domain::notification::NOTIFICATION_LIFETIME;
use serde::Deserialize;

use crate::endpoints::Endpoints;

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of every API path (e.g. `/api`).
    pub api_base: String,
    /// How long notifications stay visible, in milliseconds.
    pub notification_lifetime_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            notification_lifetime_ms: u64::try_from(NOTIFICATION_LIFETIME.as_millis())
                .unwrap_or(3000),
        }
    }
}

impl ClientConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::Validation`] on out-of-range values.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.notification_lifetime_ms == 0 {
            return Err(ConfigError::Validation(
                "notification_lifetime_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base.clone())
    }

    #[must_use]
    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.notification_lifetime_ms)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse client config")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.notification_lifetime(), Duration::from_millis(3000));
    }

    #[test]
    fn should_parse_empty_object() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn should_parse_full_document() {
        let config =
            ClientConfig::from_json(r#"{"api_base": "/hub/api", "notification_lifetime_ms": 5000}"#)
                .unwrap();
        assert_eq!(config.endpoints().charges(), "/hub/api/charges/");
        assert_eq!(config.notification_lifetime(), Duration::from_secs(5));
    }

    #[test]
    fn should_reject_zero_lifetime() {
        let result = ClientConfig::from_json(r#"{"notification_lifetime_ms": 0}"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = ClientConfig::from_json("{api_base");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
