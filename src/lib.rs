// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bravia Binding - a Rust binding for Sony Bravia televisions.
//!
//! This library polls a Bravia television's power state over the local
//! HTTP/JSON-RPC control API and exposes a single read/write `power`
//! channel to a host home-automation runtime, forwarding on/off commands
//! back to the television.
//!
//! # How it fits together
//!
//! - The host runtime drives a [`BraviaHandler`] through the
//!   [`ThingHandler`] lifecycle (`initialize` / `handle_command` /
//!   `dispose`) and receives notifications through its [`ThingLink`]
//!   implementation (`update_status` / `update_state`).
//! - Each handler is one device session: its own HTTP client, its own
//!   last-observed-power cell, one fixed-rate poll task. Nothing is
//!   shared across televisions.
//! - Poll failures never propagate: a failed tick degrades the thing to
//!   OFFLINE and the next tick retries at the same fixed interval.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use bravia_binding::{
//!     BraviaConfig, BraviaHandlerFactory, ChannelCommand, ThingLink,
//!     types::{CHANNEL_POWER, PowerState, ThingStatus, ThingTypeUid, ThingUid},
//! };
//!
//! struct MyRuntimeLink;
//!
//! impl ThingLink for MyRuntimeLink {
//!     fn update_status(&self, status: ThingStatus, detail: Option<&str>) {
//!         tracing::info!(%status, detail, "thing status changed");
//!     }
//!     fn update_state(&self, channel: &str, state: PowerState) {
//!         tracing::info!(channel, %state, "channel state changed");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> bravia_binding::Result<()> {
//!     let factory = BraviaHandlerFactory::new();
//!     let thing = ThingUid::new(ThingTypeUid::tv(), "livingroom");
//!     let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);
//!
//!     let mut handler = factory
//!         .create_handler(thing, config, Arc::new(MyRuntimeLink))
//!         .expect("tv thing type is supported");
//!
//!     // Starts the poll loop; the first tick fires immediately.
//!     handler.initialize()?;
//!
//!     // Forward a user command; the next poll reconciles the result.
//!     handler.handle_command(CHANNEL_POWER, ChannelCommand::On).await;
//!
//!     handler.dispose().await;
//!     Ok(())
//! }
//! ```
//!
//! # Talking to the television directly
//!
//! The [`protocol::SystemClient`] can be used standalone, without the
//! handler lifecycle:
//!
//! ```no_run
//! use bravia_binding::{BraviaConfig, protocol::SystemClient};
//!
//! # async fn example() -> bravia_binding::Result<()> {
//! let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);
//! let client = SystemClient::new(&config)?;
//!
//! let power = client.power_status().await?;
//! println!("TV is {power}");
//! # Ok(())
//! # }
//! ```

pub mod command;
mod config;
pub mod error;
mod factory;
pub mod handler;
pub mod protocol;
pub mod state;
pub mod types;

pub use command::ChannelCommand;
pub use config::BraviaConfig;
pub use error::{Error, ParseError, ProtocolError, Result};
pub use factory::BraviaHandlerFactory;
pub use handler::{BraviaHandler, SessionId, ThingHandler, ThingLink};
pub use protocol::SystemClient;
pub use state::PowerTracker;
pub use types::{PowerState, ThingStatus, ThingTypeUid, ThingUid};
