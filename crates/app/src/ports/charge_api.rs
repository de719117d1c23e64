//! Charge API port — the REST calls the page makes.

use std::future::Future;

use chargehub_domain::charge::{Charge, ChargeName, Etat};
use chargehub_domain::error::ChargeHubError;
use chargehub_domain::id::ChargeId;

/// Remote charge operations.
///
/// Implementations map non-2xx answers to
/// [`ChargeHubError::Rejected`] and every other failure (send, decode) to
/// [`ChargeHubError::Transport`].
pub trait ChargeApi {
    /// Fetch every charge.
    fn list(&self) -> impl Future<Output = Result<Vec<Charge>, ChargeHubError>>;

    /// Store a new display name for `id`. The success body is ignored.
    fn rename(
        &self,
        id: &ChargeId,
        name: &ChargeName,
    ) -> impl Future<Output = Result<(), ChargeHubError>>;

    /// Ask the server to move `id` to `target` and return the state it confirms.
    fn set_etat(
        &self,
        id: &ChargeId,
        target: Etat,
    ) -> impl Future<Output = Result<Etat, ChargeHubError>>;
}

impl<T: ChargeApi> ChargeApi for std::rc::Rc<T> {
    fn list(&self) -> impl Future<Output = Result<Vec<Charge>, ChargeHubError>> {
        (**self).list()
    }

    fn rename(
        &self,
        id: &ChargeId,
        name: &ChargeName,
    ) -> impl Future<Output = Result<(), ChargeHubError>> {
        (**self).rename(id, name)
    }

    fn set_etat(
        &self,
        id: &ChargeId,
        target: Etat,
    ) -> impl Future<Output = Result<Etat, ChargeHubError>> {
        (**self).set_etat(id, target)
    }
}
