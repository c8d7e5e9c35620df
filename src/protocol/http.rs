// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Bravia system service.

use std::time::Duration;

use reqwest::Client;

use crate::config::BraviaConfig;
use crate::error::{Error, ParseError, ProtocolError, Result};
use crate::types::PowerState;

use super::rpc::{RpcEnvelope, RpcRequest};

/// Header carrying the pre-shared key on control requests.
pub const PSK_HEADER: &str = "X-Auth-PSK";

/// Path of the Bravia system service.
const SYSTEM_PATH: &str = "/sony/system";

/// Client for the television's `/sony/system` endpoint.
///
/// The client is bound to one television for the lifetime of a device
/// session. Requests are plain HTTP POSTs with a JSON-RPC body; only the
/// set path carries the `X-Auth-PSK` header.
///
/// # Examples
///
/// ```no_run
/// use bravia_binding::{BraviaConfig, protocol::SystemClient};
///
/// # async fn example() -> bravia_binding::Result<()> {
/// let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);
/// let client = SystemClient::new(&config)?;
///
/// let power = client.power_status().await?;
/// client.set_power_status(!power.is_on()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SystemClient {
    endpoint: String,
    pre_shared_key: String,
    client: Client,
}

impl SystemClient {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a client for the television described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed. This is the one failure `initialize()` propagates.
    pub fn new(config: &BraviaConfig) -> Result<Self> {
        Self::with_timeout(config, Self::DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn with_timeout(config: &BraviaConfig, timeout: Duration) -> Result<Self> {
        let endpoint = format!("{}{SYSTEM_PATH}", base_url(config.address()));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self {
            endpoint,
            pre_shared_key: config.pre_shared_key().to_string(),
            client,
        })
    }

    /// Returns the full endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queries the current power status of the television.
    ///
    /// # Errors
    ///
    /// Returns an error for connect failures, HTTP errors, or a response
    /// that does not carry `result[0].status`.
    pub async fn power_status(&self) -> Result<PowerState> {
        let body = self.call(&RpcRequest::get_power_status(), false).await?;
        let envelope: RpcEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::Parse(ParseError::Json(e)))?;
        envelope.power_status()
    }

    /// Sets the power status of the television.
    ///
    /// The response body is not interpreted beyond the HTTP status; the
    /// television acknowledges via the next status poll.
    ///
    /// # Errors
    ///
    /// Returns an error for connect failures or HTTP errors.
    pub async fn set_power_status(&self, on: bool) -> Result<()> {
        self.call(&RpcRequest::set_power_status(on), true).await?;
        Ok(())
    }

    /// Posts one RPC request, attaching the PSK header when `authed`.
    /// Returns the raw response body; callers decide whether to parse it.
    async fn call(&self, request: &RpcRequest, authed: bool) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, method = request.method, "Sending RPC request");

        let mut builder = self.client.post(&self.endpoint).json(request);
        if authed {
            builder = builder.header(PSK_HEADER, &self.pre_shared_key);
        }

        let response = builder.send().await.map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status(status.as_u16()).into());
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received RPC response");

        Ok(body)
    }
}

/// Normalizes a configured address into a base URL.
///
/// Accepts a bare host, `host:port`, or a full `http(s)://` URL.
fn base_url(address: &str) -> String {
    if address.starts_with("http://") || address.starts_with("https://") {
        address.trim_end_matches('/').to_string()
    } else {
        format!("http://{address}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_from_bare_host() {
        let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);
        let client = SystemClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://192.168.1.42/sony/system");
    }

    #[test]
    fn endpoint_from_host_and_port() {
        let config = BraviaConfig::new("tv.local:8080", "0000", 5_000);
        let client = SystemClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://tv.local:8080/sony/system");
    }

    #[test]
    fn endpoint_from_full_url() {
        let config = BraviaConfig::new("https://tv.local/", "0000", 5_000);
        let client = SystemClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "https://tv.local/sony/system");
    }
}
