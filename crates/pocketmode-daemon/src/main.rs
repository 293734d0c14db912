// SPDX-License-Identifier: PMPL-1.0-or-later
//
// pocketmoded — hosts the proximity bridge for the lifetime of the process.
//
// Entry point. Initialises logging, loads the device-target table,
// constructs the bridge, and keeps it enabled until a shutdown signal.

use std::path::Path;

use pocketmode_bridge::ProximityBridge;
use pocketmode_core::config::DeviceMap;
use pocketmode_core::error::{PocketmodeError, Result};
use tracing::{error, info, warn};

/// Vendor overlay for the device-target table. Optional; the built-in
/// table covers the models this package ships on.
const DEVICE_MAP_OVERLAY: &str = "/etc/pocketmode/devices.json";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("pocketmoded starting");

    if let Err(err) = run().await {
        error!("pocketmoded failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let map = load_device_map();
    let context = pocketmode_bridge::platform_sensors();

    let mut bridge = match ProximityBridge::new(context.as_ref(), &map) {
        Ok(bridge) => bridge,
        Err(PocketmodeError::NoProximitySensor | PocketmodeError::PlatformUnavailable) => {
            // Not an error: the feature just doesn't exist on this hardware.
            info!("no proximity sensor, pocket mode unsupported here");
            return Ok(());
        }
        Err(other) => return Err(other),
    };

    bridge.enable()?;
    info!(node = %bridge.target().display(), "pocket mode enabled");

    shutdown_signal().await;

    bridge.disable()?;
    info!("pocket mode disabled, exiting");
    Ok(())
}

/// Built-in table, unless a readable vendor overlay replaces it. A
/// malformed overlay is ignored with a warning rather than taking the
/// feature down.
fn load_device_map() -> DeviceMap {
    let overlay = Path::new(DEVICE_MAP_OVERLAY);
    if overlay.exists() {
        match DeviceMap::load(overlay) {
            Ok(map) => {
                info!(path = DEVICE_MAP_OVERLAY, "loaded device table overlay");
                return map;
            }
            Err(err) => warn!("ignoring device table overlay: {err}"),
        }
    }
    DeviceMap::default()
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = term.recv() => {}
            }
        }
        Err(err) => {
            warn!("SIGTERM handler unavailable: {err}");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
