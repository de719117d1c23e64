//! Charge — a controllable electrical load.
//!
//! A charge has a display name, a free-form category, a nominal power and an
//! on/off [`Etat`]. The server owns all of it; the client only mirrors the
//! last confirmed values.

mod etat;
mod name;

pub use etat::{BadgeColor, Etat};
pub use name::ChargeName;

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::ChargeId;

/// A charge as listed by `GET /api/charges/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: ChargeId,
    #[serde(rename = "nom", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Category such as `Eclairage` or `Electromenager`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Nominal power in watts.
    #[serde(rename = "puissance_nominale", default)]
    pub nominal_power: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub etat: Etat,
}

/// Read an explicit JSON `null` as the field's default.
///
/// The server's `nom` and `etat` columns are nullable and are listed as-is.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_server_listing_entry() {
        let json = r#"{"id": 1, "nom": "Charge 1", "type": "Eclairage", "puissance_nominale": 100.0, "etat": true}"#;
        let charge: Charge = serde_json::from_str(json).unwrap();
        assert_eq!(charge.id, ChargeId::from(1));
        assert_eq!(charge.name, "Charge 1");
        assert_eq!(charge.kind.as_deref(), Some("Eclairage"));
        assert_eq!(charge.nominal_power, Some(100.0));
        assert_eq!(charge.etat, Etat::On);
    }

    #[test]
    fn should_default_to_off_when_etat_missing() {
        let charge: Charge = serde_json::from_str(r#"{"id": 2, "nom": "Four"}"#).unwrap();
        assert_eq!(charge.etat, Etat::Off);
        assert!(charge.kind.is_none());
    }

    #[test]
    fn should_default_to_empty_name_when_nom_is_null() {
        let charge: Charge =
            serde_json::from_str(r#"{"id": 3, "nom": null, "etat": true}"#).unwrap();
        assert_eq!(charge.name, "");
        assert_eq!(charge.etat, Etat::On);
    }

    #[test]
    fn should_default_to_off_when_etat_is_null() {
        let charge: Charge =
            serde_json::from_str(r#"{"id": 4, "nom": "Four", "etat": null}"#).unwrap();
        assert_eq!(charge.name, "Four");
        assert_eq!(charge.etat, Etat::Off);
    }

    #[test]
    fn should_decode_whole_listing_when_one_entry_has_null_fields() {
        let json = r#"[
            {"id": 1, "nom": "Charge 1", "type": "Eclairage", "puissance_nominale": 100.0, "etat": false},
            {"id": 2, "nom": null, "type": null, "puissance_nominale": null, "etat": null}
        ]"#;
        let charges: Vec<Charge> = serde_json::from_str(json).unwrap();
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[1].id, ChargeId::from(2));
        assert_eq!(charges[1].name, "");
        assert!(charges[1].kind.is_none());
        assert!(charges[1].nominal_power.is_none());
        assert_eq!(charges[1].etat, Etat::Off);
    }
}
