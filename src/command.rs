// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel commands received from the host platform.
//!
//! The variant is decided once at the platform boundary, so the handler
//! never inspects command types at runtime.

use std::fmt;

use crate::types::PowerState;

/// A command the host platform issues against a channel.
///
/// # Examples
///
/// ```
/// use bravia_binding::command::ChannelCommand;
///
/// assert_eq!(ChannelCommand::parse("ON"), ChannelCommand::On);
/// assert_eq!(ChannelCommand::parse("off"), ChannelCommand::Off);
/// assert_eq!(ChannelCommand::On.power_target(), Some(true));
/// assert_eq!(ChannelCommand::parse("REFRESH").power_target(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelCommand {
    /// Turn the channel on.
    On,
    /// Turn the channel off.
    Off,
    /// Any command the binding does not act on (e.g. `REFRESH`).
    Other(String),
}

impl ChannelCommand {
    /// Parses a platform command string into a closed variant.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "ON" => Self::On,
            "OFF" => Self::Off,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Returns the target power value for on/off commands, `None` otherwise.
    #[must_use]
    pub fn power_target(&self) -> Option<bool> {
        match self {
            Self::On => Some(true),
            Self::Off => Some(false),
            Self::Other(_) => None,
        }
    }
}

impl From<PowerState> for ChannelCommand {
    fn from(state: PowerState) -> Self {
        match state {
            PowerState::On => Self::On,
            PowerState::Off => Self::Off,
        }
    }
}

impl fmt::Display for ChannelCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "ON"),
            Self::Off => write!(f, "OFF"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_on_off_case_insensitive() {
        assert_eq!(ChannelCommand::parse("ON"), ChannelCommand::On);
        assert_eq!(ChannelCommand::parse("on"), ChannelCommand::On);
        assert_eq!(ChannelCommand::parse("Off"), ChannelCommand::Off);
    }

    #[test]
    fn parse_unrecognized_preserves_raw() {
        assert_eq!(
            ChannelCommand::parse("REFRESH"),
            ChannelCommand::Other("REFRESH".to_string())
        );
    }

    #[test]
    fn power_target() {
        assert_eq!(ChannelCommand::On.power_target(), Some(true));
        assert_eq!(ChannelCommand::Off.power_target(), Some(false));
        assert_eq!(
            ChannelCommand::Other("REFRESH".to_string()).power_target(),
            None
        );
    }

    #[test]
    fn from_power_state() {
        assert_eq!(ChannelCommand::from(PowerState::On), ChannelCommand::On);
        assert_eq!(ChannelCommand::from(PowerState::Off), ChannelCommand::Off);
    }
}
