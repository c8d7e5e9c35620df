// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-session power state tracking.
//!
//! [`PowerTracker`] holds the last observed power value for one device
//! session and decides when a state-change notification is due. "No prior
//! observation" is an explicit `None`, never a sentinel value.

use crate::types::PowerState;

/// Tracks the last observed power state of one television session.
///
/// # Examples
///
/// ```
/// use bravia_binding::state::PowerTracker;
/// use bravia_binding::types::PowerState;
///
/// let mut tracker = PowerTracker::new();
///
/// // First observation always notifies
/// assert!(tracker.observe(PowerState::On));
///
/// // Repeating the same value does not
/// assert!(!tracker.observe(PowerState::On));
///
/// // A transition does
/// assert!(tracker.observe(PowerState::Off));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerTracker {
    last: Option<PowerState>,
}

impl PowerTracker {
    /// Creates a tracker with no prior observation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an observation.
    ///
    /// Returns true if a state-change notification must be emitted: the
    /// value differs from the previous observation, or this is the first
    /// observation of the session.
    pub fn observe(&mut self, state: PowerState) -> bool {
        let changed = self.last != Some(state);
        self.last = Some(state);
        changed
    }

    /// Returns the last observed state, if any poll has succeeded yet.
    #[must_use]
    pub fn last(&self) -> Option<PowerState> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_has_no_observation() {
        assert_eq!(PowerTracker::new().last(), None);
    }

    #[test]
    fn first_observation_notifies() {
        let mut tracker = PowerTracker::new();
        assert!(tracker.observe(PowerState::Off));
        assert_eq!(tracker.last(), Some(PowerState::Off));
    }

    #[test]
    fn identical_observation_does_not_notify() {
        let mut tracker = PowerTracker::new();
        tracker.observe(PowerState::On);
        assert!(!tracker.observe(PowerState::On));
        assert!(!tracker.observe(PowerState::On));
    }

    #[test]
    fn transition_notifies_exactly_once() {
        let mut tracker = PowerTracker::new();
        tracker.observe(PowerState::On);
        assert!(tracker.observe(PowerState::Off));
        assert!(!tracker.observe(PowerState::Off));
    }

    #[test]
    fn notification_iff_value_differs_over_sequence() {
        let sequence = [
            PowerState::On,
            PowerState::On,
            PowerState::Off,
            PowerState::On,
            PowerState::On,
            PowerState::Off,
        ];

        let mut tracker = PowerTracker::new();
        let mut notifications = 0;
        for state in sequence {
            if tracker.observe(state) {
                notifications += 1;
            }
        }

        // first observation + 3 transitions within the sequence
        assert_eq!(notifications, 4);
    }
}
