// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration for one television thing.
//!
//! The host platform binds these fields from its configuration store before
//! `initialize()` runs; the struct is plain data and performs no validation.
//! Malformed values surface later: an empty address as request failures on
//! the first tick, a non-positive interval as a degenerate (fast) timer.

use std::time::Duration;

/// Configuration for a Bravia television thing.
///
/// # Examples
///
/// ```
/// use bravia_binding::BraviaConfig;
///
/// let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);
/// assert_eq!(config.address(), "192.168.1.42");
/// assert_eq!(config.poll_interval().as_secs(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BraviaConfig {
    /// Host or `host:port` of the television.
    address: String,
    /// Static pre-shared key sent as `X-Auth-PSK` on control requests.
    pre_shared_key: String,
    /// Poll interval in milliseconds.
    poll_interval: u64,
}

impl BraviaConfig {
    /// Creates a configuration by hand (tests and embedding without a
    /// platform configuration store).
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        pre_shared_key: impl Into<String>,
        poll_interval_ms: u64,
    ) -> Self {
        Self {
            address: address.into(),
            pre_shared_key: pre_shared_key.into(),
            poll_interval: poll_interval_ms,
        }
    }

    /// Returns the device address (host or `host:port`).
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the pre-shared key.
    #[must_use]
    pub fn pre_shared_key(&self) -> &str {
        &self.pre_shared_key
    }

    /// Returns the poll interval.
    ///
    /// Clamped to at least 1 ms: a zero-period timer cannot be constructed,
    /// so the degenerate configuration polls fast instead of panicking.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let config = BraviaConfig::new("tv.local:8080", "secret", 2_500);
        assert_eq!(config.address(), "tv.local:8080");
        assert_eq!(config.pre_shared_key(), "secret");
        assert_eq!(config.poll_interval(), Duration::from_millis(2_500));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = BraviaConfig::new("tv.local", "secret", 0);
        assert_eq!(config.poll_interval(), Duration::from_millis(1));
    }

    #[test]
    fn deserializes_platform_keys() {
        let config: BraviaConfig = serde_json::from_str(
            r#"{"address":"192.168.1.42","preSharedKey":"0000","pollInterval":5000}"#,
        )
        .unwrap();
        assert_eq!(config, BraviaConfig::new("192.168.1.42", "0000", 5_000));
    }

    #[test]
    fn serializes_platform_keys() {
        let json = serde_json::to_value(BraviaConfig::new("tv.local", "0000", 1_000)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "tv.local",
                "preSharedKey": "0000",
                "pollInterval": 1000
            })
        );
    }
}
