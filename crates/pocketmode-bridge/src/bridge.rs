// SPDX-License-Identifier: PMPL-1.0-or-later
//
// The proximity bridge: one listener that mirrors near/far into the
// fingerprint driver's proximity_state node.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pocketmode_core::config::DeviceMap;
use pocketmode_core::error::Result;
use pocketmode_core::types::{DeliveryRate, ProximityState};
use tracing::{debug, info, trace};

use crate::sysfs;
use crate::traits::{ProximitySource, SensorContext, SensorEventListener};

/// The listener half of the bridge. Lives in an `Arc` so the source can
/// hold it across its dispatch thread while the bridge keeps enable/disable
/// control.
struct PocketStateHandler {
    /// Resolved once at construction; immutable for the bridge's lifetime.
    target: PathBuf,
    maximum_range: f32,
}

impl SensorEventListener for PocketStateHandler {
    fn on_sensor_changed(&self, reading: f32) {
        let state = ProximityState::from_reading(reading, self.maximum_range);
        trace!(reading, %state, "sensor changed");

        // Checked fresh per event. An unwritable target is an expected
        // condition (driver not probed yet); the event is simply dropped.
        if sysfs::is_writable(&self.target) {
            // Failures are logged inside write_state; no retry, no backoff.
            let _ = sysfs::write_state(&self.target, state);
        } else {
            trace!(node = %self.target.display(), "target not writable, dropping event");
        }
    }
}

/// Subscribes to a proximity sensor and publishes its binary state.
///
/// Lifecycle is disabled → enabled → disabled, driven entirely by the
/// owning service; the bridge carries no internal mode beyond whether it is
/// currently registered for events.
pub struct ProximityBridge {
    source: Box<dyn ProximitySource>,
    handler: Arc<PocketStateHandler>,
}

impl ProximityBridge {
    /// Build a bridge from the platform context.
    ///
    /// Fails with `NoProximitySensor` on hardware without the sensor;
    /// callers must treat that as "feature unsupported", not retry.
    pub fn new(context: &dyn SensorContext, map: &DeviceMap) -> Result<Self> {
        let source = context.default_proximity_source()?;
        Ok(Self::with_source(source, &context.device_model(), map))
    }

    /// Build a bridge around an already-resolved sensor source.
    pub fn with_source(
        source: Box<dyn ProximitySource>,
        model: &str,
        map: &DeviceMap,
    ) -> Self {
        let target = map.resolve(model).to_path_buf();
        info!(model, node = %target.display(), "resolved proximity_state target");

        let handler = Arc::new(PocketStateHandler {
            target,
            maximum_range: source.maximum_range(),
        });
        Self { source, handler }
    }

    /// The node this bridge writes to.
    pub fn target(&self) -> &Path {
        &self.handler.target
    }

    /// Register for sensor events at the normal delivery rate.
    pub fn enable(&mut self) -> Result<()> {
        debug!("enabling");
        self.source
            .register(self.handler.clone(), DeliveryRate::Normal)
    }

    /// Deregister from sensor events. Safe without a prior `enable()`.
    pub fn disable(&mut self) -> Result<()> {
        debug!("disabling");
        self.source.unregister()
    }
}
