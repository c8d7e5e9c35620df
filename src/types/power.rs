// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state type for the television's power channel.

use std::fmt;
use std::str::FromStr;

/// Represents the power state of the television.
///
/// # Examples
///
/// ```
/// use bravia_binding::types::PowerState;
///
/// assert_eq!(PowerState::On.as_str(), "ON");
/// assert_eq!(PowerState::Off.as_str(), "OFF");
/// assert_eq!(PowerState::from_status_str("active"), PowerState::On);
/// assert_eq!(PowerState::from_status_str("standby"), PowerState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PowerState {
    /// Power is off (the television reports anything other than `active`).
    Off,
    /// Power is on (the television reports `active`).
    On,
}

impl PowerState {
    /// Bravia status string meaning the panel is powered on.
    pub const ACTIVE: &'static str = "active";

    /// Returns the platform command string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Derives the power state from the `status` string of a
    /// `getPowerStatus` response. `"active"` means on; any other value
    /// (`"standby"` and friends) means off.
    #[must_use]
    pub fn from_status_str(status: &str) -> Self {
        if status == Self::ACTIVE {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Returns true if the state is [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = InvalidPowerState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<PowerState> for bool {
    fn from(value: PowerState) -> Self {
        value.is_on()
    }
}

/// Error returned when a string is not a recognizable power state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid power state: {0}")]
pub struct InvalidPowerState(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str() {
        assert_eq!(PowerState::Off.as_str(), "OFF");
        assert_eq!(PowerState::On.as_str(), "ON");
    }

    #[test]
    fn from_status_str_active_is_on() {
        assert_eq!(PowerState::from_status_str("active"), PowerState::On);
    }

    #[test]
    fn from_status_str_anything_else_is_off() {
        assert_eq!(PowerState::from_status_str("standby"), PowerState::Off);
        assert_eq!(PowerState::from_status_str(""), PowerState::Off);
        assert_eq!(PowerState::from_status_str("Active"), PowerState::Off);
        assert_eq!(PowerState::from_status_str("shuttingdown"), PowerState::Off);
    }

    #[test]
    fn from_str_variants() {
        assert_eq!("ON".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("off".parse::<PowerState>().unwrap(), PowerState::Off);
        assert_eq!("1".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("false".parse::<PowerState>().unwrap(), PowerState::Off);
    }

    #[test]
    fn from_str_invalid() {
        assert!("maybe".parse::<PowerState>().is_err());
    }

    #[test]
    fn bool_round_trip() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert_eq!(PowerState::from(false), PowerState::Off);
        assert!(bool::from(PowerState::On));
        assert!(!bool::from(PowerState::Off));
    }
}
