// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Bravia binding.
//!
//! This module provides the error hierarchy for failures across the binding:
//! protocol communication with the television and parsing of its JSON-RPC
//! responses. The poll loop swallows all of these at the tick boundary and
//! degrades the thing status instead of propagating.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns true if this error is a network-level connectivity failure
    /// (connect refused, host unreachable) rather than a protocol or
    /// parse problem with a reachable television.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Protocol(p) if p.is_connectivity())
    }
}

/// Errors related to HTTP communication with the television.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The television answered with a non-success HTTP status.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    /// The JSON-RPC envelope carried an error instead of a result.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// Numeric Bravia error code.
        code: i64,
        /// Human-readable message from the television.
        message: String,
    },

    /// Invalid device address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl ProtocolError {
    /// Returns true for network-level connect failures.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect(),
            _ => false,
        }
    }
}

/// Errors related to parsing Bravia responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
