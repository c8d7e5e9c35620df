// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform-boundary vocabulary: thing identifiers, channel ids and the
//! connectivity status the binding reports back to the host runtime.

use std::fmt;

/// Identifier of this binding within the host platform.
pub const BINDING_ID: &str = "bravia";

/// The single channel this binding exposes.
pub const CHANNEL_POWER: &str = "power";

/// Type identifier for the television thing.
pub const THING_TYPE_TV_ID: &str = "tv";

/// Identifies a kind of thing the binding can handle (e.g. `bravia:tv`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ThingTypeUid {
    binding_id: String,
    type_id: String,
}

impl ThingTypeUid {
    /// Creates a new thing-type identifier.
    #[must_use]
    pub fn new(binding_id: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            binding_id: binding_id.into(),
            type_id: type_id.into(),
        }
    }

    /// The television thing type (`bravia:tv`).
    #[must_use]
    pub fn tv() -> Self {
        Self::new(BINDING_ID, THING_TYPE_TV_ID)
    }

    /// Returns the binding id segment.
    #[must_use]
    pub fn binding_id(&self) -> &str {
        &self.binding_id
    }

    /// Returns the type id segment.
    #[must_use]
    pub fn type_id(&self) -> &str {
        &self.type_id
    }
}

impl fmt::Display for ThingTypeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.binding_id, self.type_id)
    }
}

/// Identifies one managed thing instance (e.g. `bravia:tv:livingroom`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ThingUid {
    thing_type: ThingTypeUid,
    id: String,
}

impl ThingUid {
    /// Creates a new thing identifier.
    #[must_use]
    pub fn new(thing_type: ThingTypeUid, id: impl Into<String>) -> Self {
        Self {
            thing_type,
            id: id.into(),
        }
    }

    /// Returns the thing type.
    #[must_use]
    pub fn thing_type(&self) -> &ThingTypeUid {
        &self.thing_type
    }

    /// Returns the instance id segment.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ThingUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.thing_type, self.id)
    }
}

/// Connectivity status the binding reports to the host platform.
///
/// A session starts as [`ThingStatus::Uninitialized`], goes
/// [`ThingStatus::Online`] optimistically on initialize, and then follows
/// the poll results: any failed tick degrades it to
/// [`ThingStatus::Offline`], the next successful tick restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThingStatus {
    /// The handler exists but `initialize()` has not run yet.
    Uninitialized,
    /// The television is believed reachable.
    Online,
    /// The last poll failed.
    Offline,
}

impl ThingStatus {
    /// Returns true if the status is [`ThingStatus::Online`].
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for ThingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thing_type_display() {
        assert_eq!(ThingTypeUid::tv().to_string(), "bravia:tv");
    }

    #[test]
    fn thing_uid_display() {
        let uid = ThingUid::new(ThingTypeUid::tv(), "livingroom");
        assert_eq!(uid.to_string(), "bravia:tv:livingroom");
        assert_eq!(uid.id(), "livingroom");
    }

    #[test]
    fn thing_type_accessors() {
        let tt = ThingTypeUid::tv();
        assert_eq!(tt.binding_id(), BINDING_ID);
        assert_eq!(tt.type_id(), THING_TYPE_TV_ID);
    }

    #[test]
    fn status_checks() {
        assert!(ThingStatus::Online.is_online());
        assert!(!ThingStatus::Offline.is_online());
        assert!(!ThingStatus::Uninitialized.is_online());
    }

    #[test]
    fn status_display() {
        assert_eq!(ThingStatus::Online.to_string(), "ONLINE");
        assert_eq!(ThingStatus::Offline.to_string(), "OFFLINE");
        assert_eq!(ThingStatus::Uninitialized.to_string(), "UNINITIALIZED");
    }
}
