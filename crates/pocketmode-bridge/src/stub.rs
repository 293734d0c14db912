// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Stub context for builds where no sensor backend is available.
//
// Every resolution returns `PlatformUnavailable` — the hosting platform
// offers no sensor plumbing at all, as opposed to supported plumbing that
// found no proximity channel.

use pocketmode_core::error::{PocketmodeError, Result};

use crate::traits::{ProximitySource, SensorContext};

/// No-op context returned on platforms without a sensor backend.
pub struct StubSensorContext;

impl SensorContext for StubSensorContext {
    fn default_proximity_source(&self) -> Result<Box<dyn ProximitySource>> {
        tracing::warn!("SensorContext::default_proximity_source called on stub context");
        Err(PocketmodeError::PlatformUnavailable)
    }

    fn device_model(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_offers_no_sensor() {
        assert!(matches!(
            StubSensorContext.default_proximity_source(),
            Err(PocketmodeError::PlatformUnavailable)
        ));
    }

    #[test]
    fn stub_reports_no_model() {
        assert_eq!(StubSensorContext.device_model(), "");
    }
}
