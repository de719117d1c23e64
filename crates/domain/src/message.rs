//! User-facing messages, in the operator's language (French).

/// Shown when the submitted name is empty after trimming.
pub const EMPTY_NAME: &str = "Le nom ne peut pas être vide";

/// Fallback when the server rejects a request without a `detail`.
pub const UPDATE_FAILED: &str = "Échec de la mise à jour";

/// Shown when the server cannot be reached or the exchange breaks down.
pub const NETWORK_ERROR: &str = "Erreur réseau: impossible de contacter le serveur";

/// Action label on the toggle link while the charge is on.
pub const TURN_OFF: &str = "Éteindre";

/// Action label on the toggle link while the charge is off.
pub const TURN_ON: &str = "Allumer";

/// Success banner after a rename.
#[must_use]
pub fn name_updated(name: &str) -> String {
    format!("Nom modifié avec succès: {name}")
}

/// Success banner after a state change; `badge` is `ON` or `OFF`.
#[must_use]
pub fn etat_updated(badge: &str) -> String {
    format!("État modifié: {badge}")
}

/// Error banner for a server-side rejection.
#[must_use]
pub fn rejected(detail: Option<&str>) -> String {
    format!("Erreur: {}", detail.unwrap_or(UPDATE_FAILED))
}
