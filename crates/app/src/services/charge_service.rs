//! Charge service — the rename and toggle use-cases behind each table row.

use chargehub_domain::charge::{Charge, ChargeName, Etat};
use chargehub_domain::error::ChargeHubError;
use chargehub_domain::id::ChargeId;
use chargehub_domain::message;
use chargehub_domain::notification::Notification;

use crate::ports::ChargeApi;

/// Application service for charge interactions.
pub struct ChargeService<A> {
    api: A,
}

impl<A: ChargeApi> ChargeService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List all charges.
    ///
    /// # Errors
    ///
    /// Returns the rejection or transport error reported by the API client.
    pub async fn list_charges(&self) -> Result<Vec<Charge>, ChargeHubError> {
        self.api.list().await.inspect_err(|err| {
            tracing::warn!(error = %err, "failed to list charges");
        })
    }

    /// Validate `raw` and send it as the new name of `id`.
    ///
    /// Returns the trimmed name the server accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ChargeHubError::Validation`] without calling the API when
    /// `raw` is blank, otherwise any rejection or transport error.
    #[tracing::instrument(skip(self), fields(charge_id = %id))]
    pub async fn submit_name(
        &self,
        id: &ChargeId,
        raw: &str,
    ) -> Result<ChargeName, ChargeHubError> {
        let name = ChargeName::parse(raw)?;
        self.api.rename(id, &name).await.inspect_err(|err| {
            tracing::warn!(error = ?err, "rename failed");
        })?;
        Ok(name)
    }

    /// Ask the server to move `id` to `target` and return the confirmed state.
    ///
    /// # Errors
    ///
    /// Returns any rejection or transport error from the API client.
    #[tracing::instrument(skip(self), fields(charge_id = %id))]
    pub async fn toggle(&self, id: &ChargeId, target: Etat) -> Result<Etat, ChargeHubError> {
        let confirmed = self.api.set_etat(id, target).await.inspect_err(|err| {
            tracing::warn!(error = ?err, "state change failed");
        })?;
        if confirmed != target {
            tracing::debug!(%target, %confirmed, "server confirmed a different state");
        }
        Ok(confirmed)
    }
}

/// Banner to show after a name submission.
#[must_use]
pub fn rename_notification(result: &Result<ChargeName, ChargeHubError>) -> Notification {
    match result {
        Ok(name) => Notification::success(message::name_updated(name.as_str())),
        Err(err) => Notification::from(err),
    }
}

/// Banner to show after a toggle.
#[must_use]
pub fn toggle_notification(result: &Result<Etat, ChargeHubError>) -> Notification {
    match result {
        Ok(etat) => Notification::success(message::etat_updated(etat.badge())),
        Err(err) => Notification::from(err),
    }
}

/// The state a row should hold after a toggle: the server's answer on
/// success, the previous state otherwise.
#[must_use]
pub fn reconcile_etat(current: Etat, result: &Result<Etat, ChargeHubError>) -> Etat {
    match result {
        Ok(confirmed) => *confirmed,
        Err(_) => current,
    }
}
