// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Factory mapping thing types to handler instances.

use std::sync::Arc;

use crate::config::BraviaConfig;
use crate::handler::{BraviaHandler, ThingLink};
use crate::types::{ThingTypeUid, ThingUid};

/// Creates handlers for the thing types this binding supports.
///
/// # Examples
///
/// ```
/// use bravia_binding::{BraviaHandlerFactory, types::ThingTypeUid};
///
/// let factory = BraviaHandlerFactory::new();
/// assert!(factory.supports_thing_type(&ThingTypeUid::tv()));
/// assert!(!factory.supports_thing_type(&ThingTypeUid::new("hue", "bulb")));
/// ```
#[derive(Debug, Default)]
pub struct BraviaHandlerFactory;

impl BraviaHandlerFactory {
    /// Creates a new factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns true if this binding handles the given thing type.
    #[must_use]
    pub fn supports_thing_type(&self, thing_type: &ThingTypeUid) -> bool {
        *thing_type == ThingTypeUid::tv()
    }

    /// Creates a handler for the thing, or `None` for unsupported types.
    ///
    /// The returned handler is inert; the platform is expected to call
    /// `initialize()` on it next.
    #[must_use]
    pub fn create_handler(
        &self,
        thing: ThingUid,
        config: BraviaConfig,
        link: Arc<dyn ThingLink>,
    ) -> Option<BraviaHandler> {
        if !self.supports_thing_type(thing.thing_type()) {
            return None;
        }

        Some(BraviaHandler::new(thing, config, link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PowerState, ThingStatus};

    struct NullLink;

    impl ThingLink for NullLink {
        fn update_status(&self, _status: ThingStatus, _detail: Option<&str>) {}
        fn update_state(&self, _channel: &str, _state: PowerState) {}
    }

    #[test]
    fn supports_only_tv() {
        let factory = BraviaHandlerFactory::new();
        assert!(factory.supports_thing_type(&ThingTypeUid::tv()));
        assert!(!factory.supports_thing_type(&ThingTypeUid::new("bravia", "soundbar")));
    }

    #[test]
    fn creates_handler_for_tv() {
        let factory = BraviaHandlerFactory::new();
        let thing = ThingUid::new(ThingTypeUid::tv(), "livingroom");
        let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);

        let handler = factory.create_handler(thing, config, Arc::new(NullLink));
        assert!(handler.is_some());
        assert_eq!(
            handler.unwrap().thing().to_string(),
            "bravia:tv:livingroom"
        );
    }

    #[test]
    fn rejects_unsupported_thing_type() {
        let factory = BraviaHandlerFactory::new();
        let thing = ThingUid::new(ThingTypeUid::new("hue", "bulb"), "hall");
        let config = BraviaConfig::new("192.168.1.42", "0000", 5_000);

        assert!(factory.create_handler(thing, config, Arc::new(NullLink)).is_none());
    }
}
