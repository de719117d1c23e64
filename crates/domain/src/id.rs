//! Opaque charge identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Charge`](crate::charge::Charge).
///
/// The server hands out integers, but the client never does arithmetic on
/// them: the id only travels into URLs and `data-charge-id` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChargeId(String);

impl ChargeId {
    /// Access the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChargeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChargeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<u64> for ChargeId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ChargeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::from(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id: ChargeId = "42".parse().unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn should_return_error_when_parsing_blank_token() {
        assert_eq!(ChargeId::from_str("  "), Err(ValidationError::EmptyId));
    }

    #[test]
    fn should_deserialize_from_integer() {
        let id: ChargeId = serde_json::from_str("3").unwrap();
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn should_deserialize_from_string() {
        let id: ChargeId = serde_json::from_str("\"boiler\"").unwrap();
        assert_eq!(id, ChargeId::from_str("boiler").unwrap());
    }

    #[test]
    fn should_reject_empty_string_when_deserializing() {
        let result = serde_json::from_str::<ChargeId>("\"\"");
        assert!(result.is_err());
    }
}
