//! Request paths for the charge API.

use chargehub_domain::charge::Etat;
use chargehub_domain::id::ChargeId;

/// Builds charge API paths under a configurable prefix (e.g. `/api`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new("/api")
    }
}

impl Endpoints {
    /// Create endpoints rooted at `base`. A trailing `/` is dropped.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// `GET` — list every charge.
    #[must_use]
    pub fn charges(&self) -> String {
        format!("{}/charges/", self.base)
    }

    /// `POST` — rename a charge.
    #[must_use]
    pub fn rename(&self, id: &ChargeId) -> String {
        format!("{}/charges/{}/nom", self.base, encode_segment(id.as_str()))
    }

    /// `PUT` — move a charge to `target`.
    #[must_use]
    pub fn etat(&self, id: &ChargeId, target: Etat) -> String {
        format!(
            "{}/charges/{}/etat?etat={}",
            self.base,
            encode_segment(id.as_str()),
            target.is_on()
        )
    }
}

/// Percent-encode the characters that would break out of a path segment.
fn encode_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace(' ', "%20")
}
