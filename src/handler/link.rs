// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound half of the host-runtime boundary.

use crate::types::{PowerState, ThingStatus};

/// Callbacks the binding invokes on the host platform.
///
/// The handler depends only on this trait, never on a concrete runtime,
/// so tests substitute a recording double and embedders adapt it to
/// whatever event system they run.
///
/// Implementations must tolerate being called from the poll task and from
/// the platform's own command thread concurrently.
pub trait ThingLink: Send + Sync + 'static {
    /// Reports the thing's connectivity status, with an optional detail
    /// message on degradation.
    fn update_status(&self, status: ThingStatus, detail: Option<&str>);

    /// Reports a new value for a channel.
    fn update_state(&self, channel: &str, state: PowerState);
}
