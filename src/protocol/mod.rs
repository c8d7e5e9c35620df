// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire protocol for the Bravia local control API.
//!
//! Bravia televisions expose a JSON-RPC dialect over plain HTTP. This
//! module provides the request/envelope types ([`RpcRequest`],
//! [`RpcEnvelope`]) and the per-session [`SystemClient`] that posts them
//! to `/sony/system`.

mod http;
mod rpc;

pub use http::{PSK_HEADER, SystemClient};
pub use rpc::{RpcEnvelope, RpcRequest};
