// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Linux sensor context backed by the industrial I/O (IIO) sysfs interface.
//
// Proximity channels show up as `in_proximity_raw` under
// /sys/bus/iio/devices/iio:deviceN. There is no hardware event delivery on
// the raw sysfs path, so the source polls from its own thread at the
// requested rate and plays the role of the platform dispatch thread.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use pocketmode_core::error::{PocketmodeError, Result};
use pocketmode_core::types::{DeliveryRate, SensorAccuracy};
use tracing::{debug, info, warn};

use crate::traits::{ProximitySource, SensorContext, SensorEventListener};

const IIO_ROOT: &str = "/sys/bus/iio/devices";
const DT_MODEL: &str = "/sys/firmware/devicetree/base/model";

/// Maximum range assumed when the channel publishes no scale attribute.
/// Binary-reporting proximity drivers conventionally cap at 5.0.
const DEFAULT_MAXIMUM_RANGE: f32 = 5.0;

/// Sensor context for Linux hosts.
pub struct LinuxSensorContext {
    iio_root: PathBuf,
    dt_model: PathBuf,
}

impl LinuxSensorContext {
    pub fn new() -> Self {
        Self::with_roots(Path::new(IIO_ROOT), Path::new(DT_MODEL))
    }

    /// Point the context at an alternate sysfs tree. Used by tests.
    pub fn with_roots(iio_root: &Path, dt_model: &Path) -> Self {
        Self {
            iio_root: iio_root.to_path_buf(),
            dt_model: dt_model.to_path_buf(),
        }
    }
}

impl Default for LinuxSensorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorContext for LinuxSensorContext {
    fn default_proximity_source(&self) -> Result<Box<dyn ProximitySource>> {
        let entries = std::fs::read_dir(&self.iio_root)
            .map_err(|_| PocketmodeError::NoProximitySensor)?;

        for entry in entries.flatten() {
            let raw = entry.path().join("in_proximity_raw");
            if raw.is_file() {
                let maximum_range = read_attr_f32(&entry.path().join("in_proximity_scale"))
                    .unwrap_or(DEFAULT_MAXIMUM_RANGE);
                info!(
                    channel = %raw.display(),
                    maximum_range,
                    "found IIO proximity channel"
                );
                return Ok(Box::new(IioProximitySource::new(raw, maximum_range)));
            }
        }

        Err(PocketmodeError::NoProximitySensor)
    }

    fn device_model(&self) -> String {
        match std::fs::read_to_string(&self.dt_model) {
            // Device-tree strings are NUL-terminated.
            Ok(model) => model.trim_end_matches(['\0', '\n']).to_string(),
            Err(_) => String::new(),
        }
    }
}

fn read_attr_f32(path: &Path) -> Option<f32> {
    let text = std::fs::read_to_string(path).ok()?;
    text.trim().parse().ok()
}

/// Proximity source polling one IIO raw channel.
pub struct IioProximitySource {
    raw_path: PathBuf,
    maximum_range: f32,
    worker: Option<PollWorker>,
}

impl IioProximitySource {
    pub fn new(raw_path: PathBuf, maximum_range: f32) -> Self {
        Self {
            raw_path,
            maximum_range,
            worker: None,
        }
    }
}

impl ProximitySource for IioProximitySource {
    fn maximum_range(&self) -> f32 {
        self.maximum_range
    }

    fn register(
        &mut self,
        listener: Arc<dyn SensorEventListener>,
        rate: DeliveryRate,
    ) -> Result<()> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = stop.clone();
        let raw_path = self.raw_path.clone();
        let interval = rate.interval();

        let handle = std::thread::Builder::new()
            .name("pocketmode-iio".to_string())
            .spawn(move || {
                debug!(channel = %raw_path.display(), "poll thread started");
                let mut accuracy_reported = false;
                while !thread_stop.load(Ordering::Relaxed) {
                    match read_attr_f32(&raw_path) {
                        Some(reading) => {
                            if !accuracy_reported {
                                listener.on_accuracy_changed(SensorAccuracy::High);
                                accuracy_reported = true;
                            }
                            listener.on_sensor_changed(reading);
                        }
                        None => {
                            warn!(channel = %raw_path.display(), "unreadable proximity channel");
                        }
                    }
                    std::thread::sleep(interval);
                }
                debug!(channel = %raw_path.display(), "poll thread stopped");
            })
            .map_err(|err| PocketmodeError::Registration(err.to_string()))?;

        // Replacing an existing worker stops it via Drop. Double-register
        // is still a caller error; this just keeps the old thread from
        // outliving its registration.
        self.worker = Some(PollWorker {
            stop,
            handle: Some(handle),
        });
        Ok(())
    }

    fn unregister(&mut self) -> Result<()> {
        self.worker.take();
        Ok(())
    }
}

struct PollWorker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Drop for PollWorker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
