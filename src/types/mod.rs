// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types shared across the binding.
//!
//! [`PowerState`] models the television's power channel value;
//! [`ThingTypeUid`], [`ThingUid`] and [`ThingStatus`] are the vocabulary of
//! the host-platform boundary.

mod power;
mod thing;

pub use power::{InvalidPowerState, PowerState};
pub use thing::{
    BINDING_ID, CHANNEL_POWER, THING_TYPE_TV_ID, ThingStatus, ThingTypeUid, ThingUid,
};
