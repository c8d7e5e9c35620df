// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON-RPC wire types for the Bravia system service.
//!
//! The television speaks a JSON-RPC dialect on `/sony/system`: requests
//! carry `method`/`params`/`id`/`version`, responses either a `result`
//! array or an `error` array of `[code, message]`.

use serde_json::Value;

use crate::error::{ParseError, ProtocolError};
use crate::types::PowerState;

/// Protocol version every Bravia system request carries.
const RPC_VERSION: &str = "1.0";

/// Request id used for power status queries.
const ID_GET_POWER_STATUS: u32 = 1;
/// Request id used for power status changes.
const ID_SET_POWER_STATUS: u32 = 2;

/// A JSON-RPC request to the television's system service.
///
/// # Examples
///
/// ```
/// use bravia_binding::protocol::RpcRequest;
///
/// let req = RpcRequest::get_power_status();
/// let body = serde_json::to_value(&req).unwrap();
/// assert_eq!(body["method"], "getPowerStatus");
/// assert_eq!(body["id"], 1);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RpcRequest {
    /// RPC method name.
    pub method: &'static str,
    /// Positional parameters.
    pub params: Vec<Value>,
    /// Request id (fixed per method, matching the original binding).
    pub id: u32,
    /// Protocol version, always `"1.0"`.
    pub version: &'static str,
}

impl RpcRequest {
    /// Builds the `getPowerStatus` query.
    #[must_use]
    pub fn get_power_status() -> Self {
        Self {
            method: "getPowerStatus",
            params: Vec::new(),
            id: ID_GET_POWER_STATUS,
            version: RPC_VERSION,
        }
    }

    /// Builds the `setPowerStatus` command.
    #[must_use]
    pub fn set_power_status(on: bool) -> Self {
        Self {
            method: "setPowerStatus",
            params: vec![serde_json::json!({ "status": on })],
            id: ID_SET_POWER_STATUS,
            version: RPC_VERSION,
        }
    }
}

/// A JSON-RPC response envelope from the television.
///
/// Fields beyond `result`/`error` are ignored, as are any entries of the
/// result objects the binding does not understand.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RpcEnvelope {
    /// Result array on success.
    #[serde(default)]
    pub result: Option<Vec<Value>>,
    /// `[code, message]` pair on failure.
    #[serde(default)]
    pub error: Option<Vec<Value>>,
    /// Echoed request id.
    #[serde(default)]
    pub id: Option<u32>,
}

impl RpcEnvelope {
    /// Returns the result array, converting an RPC error into
    /// [`ProtocolError::Rpc`].
    ///
    /// # Errors
    ///
    /// Returns an error if the envelope carries an `error` array or
    /// neither `result` nor `error`.
    pub fn into_result(self) -> Result<Vec<Value>, crate::error::Error> {
        if let Some(error) = self.error {
            let code = error.first().and_then(Value::as_i64).unwrap_or(-1);
            let message = error
                .get(1)
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            return Err(ProtocolError::Rpc { code, message }.into());
        }

        self.result
            .ok_or_else(|| ParseError::MissingField("result".to_string()).into())
    }

    /// Extracts the power state from a `getPowerStatus` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error for RPC errors, a missing/empty result array, or a
    /// first result object without a string `status` field.
    pub fn power_status(self) -> Result<PowerState, crate::error::Error> {
        let result = self.into_result()?;
        let first = result
            .first()
            .ok_or_else(|| ParseError::UnexpectedFormat("empty result array".to_string()))?;

        let status: PowerStatusResult = serde_json::from_value(first.clone())
            .map_err(|e| crate::error::Error::Parse(e.into()))?;

        Ok(PowerState::from_status_str(&status.status))
    }
}

/// First element of a `getPowerStatus` result array.
#[derive(Debug, Clone, serde::Deserialize)]
struct PowerStatusResult {
    status: String,
}
