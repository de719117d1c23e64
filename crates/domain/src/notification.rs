//! Notification — a transient success/error banner.

use std::time::Duration;

use crate::error::ChargeHubError;

/// How long a notification stays visible.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(3000);

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Success,
    Error,
}

/// A message to flash in one of a row's alert slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub polarity: Polarity,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::Error,
            message: message.into(),
        }
    }
}

impl From<&ChargeHubError> for Notification {
    fn from(err: &ChargeHubError) -> Self {
        Self::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn should_last_three_seconds() {
        assert_eq!(NOTIFICATION_LIFETIME.as_millis(), 3000);
    }

    #[test]
    fn should_convert_error_into_error_notification() {
        let err: ChargeHubError = ValidationError::EmptyName.into();
        let notification = Notification::from(&err);
        assert_eq!(notification.polarity, Polarity::Error);
        assert_eq!(notification.message, "Le nom ne peut pas être vide");
    }
}
