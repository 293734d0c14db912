// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Pocketmode — proximity bridge and platform sensor dispatch.
//
// The bridge subscribes to a proximity sensor through the `traits` seams
// and mirrors each reading's near/far state into the fingerprint driver's
// proximity_state sysfs node, so the driver can ignore touches while the
// phone sits in a pocket.

pub mod bridge;
pub mod sysfs;
pub mod traits;

#[cfg(target_os = "linux")]
pub mod linux;

pub mod stub;

pub use bridge::ProximityBridge;

/// Retrieves the sensor context for the target operating system.
pub fn platform_sensors() -> Box<dyn traits::SensorContext> {
    #[cfg(target_os = "linux")]
    {
        Box::new(linux::LinuxSensorContext::new())
    }
    #[cfg(not(target_os = "linux"))]
    {
        Box::new(stub::StubSensorContext)
    }
}
