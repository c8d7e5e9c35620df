// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thing handler for one Bravia television.
//!
//! [`BraviaHandler`] owns one device session: the configuration, its own
//! HTTP client, its own last-observed-power cell and a single periodic
//! poll task. The host runtime drives it through the [`ThingHandler`]
//! lifecycle and receives status and state updates through [`ThingLink`].

mod link;
mod session;

pub use link::ThingLink;
pub use session::SessionId;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::command::ChannelCommand;
use crate::config::BraviaConfig;
use crate::error::Result;
use crate::protocol::SystemClient;
use crate::state::PowerTracker;
use crate::types::{CHANNEL_POWER, PowerState, ThingStatus, ThingUid};

/// Inbound half of the host-runtime boundary.
///
/// The platform invokes `initialize()` and `dispose()` on lifecycle
/// transitions and `handle_command()` when the user issues a command.
#[allow(async_fn_in_trait)]
pub trait ThingHandler {
    /// Brings the session up: client construction, optimistic ONLINE
    /// report, poll task start.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be constructed;
    /// everything else is reported through the status channel.
    async fn initialize(&mut self) -> Result<()>;

    /// Handles a command issued against one of the thing's channels.
    ///
    /// May be called concurrently with an in-flight poll tick.
    async fn handle_command(&self, channel: &str, command: ChannelCommand);

    /// Tears the session down. Never fails; shutdown problems are logged
    /// and swallowed. No poll tick begins after this returns.
    async fn dispose(&mut self);
}

/// Handler for one Bravia television thing.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use bravia_binding::{
///     BraviaConfig, BraviaHandler, ChannelCommand, ThingLink,
///     types::{CHANNEL_POWER, PowerState, ThingStatus, ThingTypeUid, ThingUid},
/// };
///
/// struct PrintLink;
///
/// impl ThingLink for PrintLink {
///     fn update_status(&self, status: ThingStatus, _detail: Option<&str>) {
///         tracing::info!(%status, "thing status");
///     }
///     fn update_state(&self, channel: &str, state: PowerState) {
///         tracing::info!(channel, %state, "channel state");
///     }
/// }
///
/// #[tokio::main]
/// async fn main() -> bravia_binding::Result<()> {
///     let thing = ThingUid::new(ThingTypeUid::tv(), "livingroom");
///     let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);
///     let mut handler = BraviaHandler::new(thing, config, Arc::new(PrintLink));
///
///     handler.initialize()?;
///     handler.handle_command(CHANNEL_POWER, ChannelCommand::On).await;
///     handler.dispose().await;
///     Ok(())
/// }
/// ```
pub struct BraviaHandler {
    thing: ThingUid,
    session: SessionId,
    config: BraviaConfig,
    link: Arc<dyn ThingLink>,
    shared: Arc<Shared>,
    client: Option<Arc<SystemClient>>,
    poll_task: Option<JoinHandle<()>>,
}

/// State shared between the handler and its poll task.
struct Shared {
    tracker: Mutex<PowerTracker>,
    status: Mutex<ThingStatus>,
    last_seen: Mutex<Option<DateTime<Utc>>>,
}

impl BraviaHandler {
    /// Creates a handler for the given thing.
    ///
    /// The session is inert until [`BraviaHandler::initialize`] runs.
    #[must_use]
    pub fn new(thing: ThingUid, config: BraviaConfig, link: Arc<dyn ThingLink>) -> Self {
        Self {
            thing,
            session: SessionId::new(),
            config,
            link,
            shared: Arc::new(Shared {
                tracker: Mutex::new(PowerTracker::new()),
                status: Mutex::new(ThingStatus::Uninitialized),
                last_seen: Mutex::new(None),
            }),
            client: None,
            poll_task: None,
        }
    }

    /// Brings the session up. See [`ThingHandler::initialize`].
    ///
    /// Reports ONLINE optimistically before the first poll has run; the
    /// first tick (which fires immediately) corrects the status if the
    /// television is unreachable.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be constructed.
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            session = %self.session,
            thing = %self.thing,
            address = self.config.address(),
            interval_ms = u64::try_from(self.config.poll_interval().as_millis()).unwrap_or(u64::MAX),
            "Initializing Bravia handler"
        );

        let client = Arc::new(SystemClient::new(&self.config)?);

        *self.shared.status.lock() = ThingStatus::Online;
        self.link.update_status(ThingStatus::Online, None);

        // A leftover task from a previous initialize must not keep ticking.
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }

        self.poll_task = Some(self.spawn_poll_task(Arc::clone(&client)));
        self.client = Some(client);

        Ok(())
    }

    /// Handles a platform command. See [`ThingHandler::handle_command`].
    ///
    /// Only the power channel is recognized; the command is fire-and-forget
    /// and never touches the last-observed state; the next poll tick
    /// reconciles whatever the television actually did.
    pub async fn handle_command(&self, channel: &str, command: ChannelCommand) {
        if channel != CHANNEL_POWER {
            tracing::debug!(session = %self.session, channel, "Ignoring command for unknown channel");
            return;
        }

        let Some(on) = command.power_target() else {
            tracing::debug!(session = %self.session, %command, "Ignoring non-power command");
            return;
        };

        let Some(client) = &self.client else {
            tracing::debug!(session = %self.session, "Dropping command, session not running");
            return;
        };

        tracing::info!(session = %self.session, status = on, "Setting power status");

        if let Err(e) = client.set_power_status(on).await {
            tracing::error!(session = %self.session, error = %e, "Failed to set power status");
        }
    }

    /// Tears the session down. See [`ThingHandler::dispose`].
    ///
    /// Aborts the poll task and waits for it to terminate, so no tick body
    /// is still running when this returns. Never propagates failures.
    pub async fn dispose(&mut self) {
        tracing::info!(session = %self.session, "Disposing");

        if let Some(task) = self.poll_task.take() {
            task.abort();
            // JoinError from the aborted task is expected; swallow it.
            let _ = task.await;
        }

        self.client = None;
    }

    /// Returns the thing this handler is bound to.
    #[must_use]
    pub fn thing(&self) -> &ThingUid {
        &self.thing
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Returns the status last reported to the platform.
    #[must_use]
    pub fn status(&self) -> ThingStatus {
        *self.shared.status.lock()
    }

    /// Returns the last observed power state, if any poll has succeeded.
    #[must_use]
    pub fn last_power(&self) -> Option<PowerState> {
        self.shared.tracker.lock().last()
    }

    /// Returns the wall-clock time of the last successful poll.
    #[must_use]
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        *self.shared.last_seen.lock()
    }

    /// Spawns the fixed-rate poll task. The first tick fires immediately;
    /// a tick that runs long delays the next one instead of overlapping.
    fn spawn_poll_task(&self, client: Arc<SystemClient>) -> JoinHandle<()> {
        let session = self.session;
        let shared = Arc::clone(&self.shared);
        let link = Arc::clone(&self.link);
        let period = self.config.poll_interval();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                poll_once(session, &client, &shared, link.as_ref()).await;
            }
        })
    }
}

impl ThingHandler for BraviaHandler {
    async fn initialize(&mut self) -> Result<()> {
        Self::initialize(self)
    }

    async fn handle_command(&self, channel: &str, command: ChannelCommand) {
        Self::handle_command(self, channel, command).await;
    }

    async fn dispose(&mut self) {
        Self::dispose(self).await;
    }
}

impl std::fmt::Debug for BraviaHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraviaHandler")
            .field("thing", &self.thing.to_string())
            .field("session", &self.session)
            .field("status", &self.status())
            .field("running", &self.poll_task.is_some())
            .finish_non_exhaustive()
    }
}

/// One poll tick: fetch the power status and reconcile it into platform
/// notifications. All failures are swallowed here; the only observable
/// effect of a bad tick is an OFFLINE status report.
async fn poll_once(
    session: SessionId,
    client: &SystemClient,
    shared: &Shared,
    link: &dyn ThingLink,
) {
    match client.power_status().await {
        Ok(power) => {
            *shared.last_seen.lock() = Some(Utc::now());

            let restored = {
                let mut status = shared.status.lock();
                let restored = !status.is_online();
                *status = ThingStatus::Online;
                restored
            };
            if restored {
                tracing::info!(%session, "TV connection restored");
                link.update_status(ThingStatus::Online, None);
            }

            if shared.tracker.lock().observe(power) {
                tracing::info!(%session, state = %power, "Updating power state");
                link.update_state(CHANNEL_POWER, power);
            }
        }
        Err(e) => {
            if e.is_connectivity() {
                tracing::warn!(%session, error = %e, "Unable to connect to TV");
            } else {
                tracing::error!(%session, error = %e, "Status poll failed");
            }

            *shared.status.lock() = ThingStatus::Offline;
            link.update_status(ThingStatus::Offline, Some(&e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThingTypeUid;

    #[derive(Default)]
    struct RecordingLink {
        statuses: Mutex<Vec<ThingStatus>>,
        states: Mutex<Vec<(String, PowerState)>>,
    }

    impl ThingLink for RecordingLink {
        fn update_status(&self, status: ThingStatus, _detail: Option<&str>) {
            self.statuses.lock().push(status);
        }

        fn update_state(&self, channel: &str, state: PowerState) {
            self.states.lock().push((channel.to_string(), state));
        }
    }

    fn handler_with_link() -> (BraviaHandler, Arc<RecordingLink>) {
        let link = Arc::new(RecordingLink::default());
        let dyn_link: Arc<dyn ThingLink> = link.clone();
        let thing = ThingUid::new(ThingTypeUid::tv(), "test");
        let config = BraviaConfig::new("127.0.0.1:9", "0000", 60_000);
        (BraviaHandler::new(thing, config, dyn_link), link)
    }

    #[test]
    fn new_handler_is_uninitialized() {
        let (handler, link) = handler_with_link();

        assert_eq!(handler.status(), ThingStatus::Uninitialized);
        assert_eq!(handler.last_power(), None);
        assert_eq!(handler.last_seen(), None);
        assert!(link.statuses.lock().is_empty());
    }

    #[tokio::test]
    async fn initialize_reports_online_optimistically() {
        let (mut handler, link) = handler_with_link();

        handler.initialize().unwrap();

        assert_eq!(handler.status(), ThingStatus::Online);
        assert_eq!(link.statuses.lock().first(), Some(&ThingStatus::Online));

        handler.dispose().await;
    }

    #[tokio::test]
    async fn command_before_initialize_is_dropped() {
        let (handler, _link) = handler_with_link();

        // Must not panic or touch state.
        handler.handle_command(CHANNEL_POWER, ChannelCommand::On).await;
        assert_eq!(handler.last_power(), None);
    }

    #[tokio::test]
    async fn command_for_unknown_channel_is_ignored() {
        let (mut handler, _link) = handler_with_link();
        handler.initialize().unwrap();

        handler.handle_command("volume", ChannelCommand::On).await;
        assert_eq!(handler.last_power(), None);

        handler.dispose().await;
    }

    #[tokio::test]
    async fn dispose_without_initialize_is_a_no_op() {
        let (mut handler, _link) = handler_with_link();
        handler.dispose().await;
        handler.dispose().await;
    }

    #[tokio::test]
    async fn command_after_dispose_is_dropped() {
        let (mut handler, _link) = handler_with_link();
        handler.initialize().unwrap();
        handler.dispose().await;

        handler.handle_command(CHANNEL_POWER, ChannelCommand::Off).await;
        assert_eq!(handler.last_power(), None);
    }

    #[test]
    fn debug_format_names_the_thing() {
        let (handler, _link) = handler_with_link();
        let debug = format!("{handler:?}");
        assert!(debug.contains("bravia:tv:test"));
    }
}
