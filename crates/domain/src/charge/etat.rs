//! Etat — the on/off state of a charge and how it is presented.

use serde::{Deserialize, Serialize};

use crate::message;

/// On/off state of a charge. Serialized as a JSON boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Etat {
    On,
    #[default]
    Off,
}

/// Badge color for an [`Etat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Red,
}

impl Etat {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// The opposite state; the target of the next toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Badge text: `ON` or `OFF`.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }

    #[must_use]
    pub fn badge_color(self) -> BadgeColor {
        match self {
            Self::On => BadgeColor::Green,
            Self::Off => BadgeColor::Red,
        }
    }

    /// Label of the control that would move the charge out of this state.
    #[must_use]
    pub fn action_label(self) -> &'static str {
        match self {
            Self::On => message::TURN_OFF,
            Self::Off => message::TURN_ON,
        }
    }
}

impl From<bool> for Etat {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<Etat> for bool {
    fn from(value: Etat) -> Self {
        value.is_on()
    }
}

impl std::fmt::Display for Etat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.badge())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert_eq!(Etat::default(), Etat::Off);
    }

    #[test]
    fn should_alternate_when_toggled_twice() {
        assert_eq!(Etat::On.toggled(), Etat::Off);
        assert_eq!(Etat::On.toggled().toggled(), Etat::On);
    }

    #[test]
    fn should_present_green_on_badge_and_turn_off_label_when_on() {
        assert_eq!(Etat::On.badge(), "ON");
        assert_eq!(Etat::On.badge_color(), BadgeColor::Green);
        assert_eq!(Etat::On.action_label(), "Éteindre");
    }

    #[test]
    fn should_present_red_off_badge_and_turn_on_label_when_off() {
        assert_eq!(Etat::Off.badge(), "OFF");
        assert_eq!(Etat::Off.badge_color(), BadgeColor::Red);
        assert_eq!(Etat::Off.action_label(), "Allumer");
    }

    #[test]
    fn should_serialize_as_json_boolean() {
        assert_eq!(serde_json::to_string(&Etat::On).unwrap(), "true");
        let parsed: Etat = serde_json::from_str("false").unwrap();
        assert_eq!(parsed, Etat::Off);
    }
}
