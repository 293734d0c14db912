// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Platform-agnostic trait definitions for the proximity sensor plumbing.
//
// The bridge never talks to sensor hardware directly. It consumes these
// seams, and each platform module provides implementations backed by
// whatever the OS actually exposes.

use std::sync::Arc;

use pocketmode_core::error::Result;
use pocketmode_core::types::{DeliveryRate, SensorAccuracy};

/// Receiver of sensor events.
///
/// Sources invoke these callbacks from their own dispatch context, one at a
/// time and in delivery order. Implementations must not assume any
/// particular thread.
pub trait SensorEventListener: Send + Sync {
    /// A new distance reading, in the sensor's native unit.
    fn on_sensor_changed(&self, reading: f32);

    /// The stream's reported accuracy changed. Most listeners don't care.
    fn on_accuracy_changed(&self, _accuracy: SensorAccuracy) {}
}

/// A proximity sensor as the platform exposes it.
pub trait ProximitySource: Send {
    /// Static maximum detection range of this sensor. Readings at or beyond
    /// this value mean "nothing nearby".
    fn maximum_range(&self) -> f32;

    /// Start delivering events to `listener` at roughly the requested rate.
    ///
    /// Registering while already registered is a caller error; sources are
    /// not required to guard against it.
    fn register(
        &mut self,
        listener: Arc<dyn SensorEventListener>,
        rate: DeliveryRate,
    ) -> Result<()>;

    /// Stop delivering events. Idempotent: deregistering an unregistered
    /// source is a no-op.
    fn unregister(&mut self) -> Result<()>;
}

/// Entry point a platform offers for resolving sensors and identity.
pub trait SensorContext {
    /// The device's default proximity sensor.
    ///
    /// Returns `PocketmodeError::NoProximitySensor` when the hardware has
    /// none; callers must treat that as "feature unsupported", not retry.
    fn default_proximity_source(&self) -> Result<Box<dyn ProximitySource>>;

    /// Hardware model identifier (e.g. "OnePlus5"), used to pick the output
    /// node. Empty when the platform cannot say.
    fn device_model(&self) -> String;
}
