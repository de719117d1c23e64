//! Charge name value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Human-readable label of a charge. Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChargeName(String);

impl ChargeName {
    /// Trim `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChargeName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChargeName> for String {
    fn from(value: ChargeName) -> Self {
        value.0
    }
}

impl fmt::Display for ChargeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
