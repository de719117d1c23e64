//! Common error types used across the workspace.
//!
//! Every variant renders as the message shown to the operator, so adapters
//! turn any failure into a notification with `err.to_string()`.

use crate::message;

/// Top-level error for every charge interaction.
#[derive(Debug, thiserror::Error)]
pub enum ChargeHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Rejected(#[from] RejectedError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", message::EMPTY_NAME)]
    EmptyName,

    #[error("charge id must not be empty")]
    EmptyId,
}

/// The server answered with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", message::rejected(.detail.as_deref()))]
pub struct RejectedError {
    /// HTTP status code.
    pub status: u16,
    /// Server-supplied `detail`, when the body carried a non-empty one.
    pub detail: Option<String>,
}

impl RejectedError {
    /// Build a rejection, treating an empty `detail` like a missing one.
    #[must_use]
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self {
            status,
            detail: detail.filter(|d| !d.is_empty()),
        }
    }
}

/// The request could not be built, sent, or its answer decoded.
///
/// `cause` is kept for logs only; the operator always sees the generic
/// network message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", message::NETWORK_ERROR)]
pub struct TransportError {
    pub cause: String,
}

impl TransportError {
    #[must_use]
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}
