// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Device-target table: which proximity_state node to write on which model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One known device model and the sysfs node its fingerprint driver exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMapEntry {
    /// Device-model string, matched exactly (case-sensitive).
    pub model: String,
    /// Path of the proximity_state node for that model.
    pub path: PathBuf,
}

/// Enumerated map from device-model string to output node, with a declared
/// fallback for every model not listed.
///
/// Resolution is total: any model string — empty, unicode, never seen
/// before — resolves to exactly one path. Adding support for a new device
/// is a data change (extend the table), not a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMap {
    pub entries: Vec<DeviceMapEntry>,
    pub fallback: PathBuf,
}

impl Default for DeviceMap {
    fn default() -> Self {
        Self {
            entries: vec![DeviceMapEntry {
                model: "OnePlus5".to_string(),
                path: PathBuf::from("/sys/devices/soc/soc:fpc_fpc1020/proximity_state"),
            }],
            fallback: PathBuf::from("/sys/devices/soc/soc:goodix_fp/proximity_state"),
        }
    }
}

impl DeviceMap {
    /// Resolve the output node for a device model. First exact match wins;
    /// everything else gets the fallback.
    pub fn resolve(&self, model: &str) -> &Path {
        self.entries
            .iter()
            .find(|entry| entry.model == model)
            .map(|entry| entry.path.as_path())
            .unwrap_or(self.fallback.as_path())
    }

    /// Load a vendor overlay table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let map: DeviceMap = serde_json::from_reader(file)?;
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FPC: &str = "/sys/devices/soc/soc:fpc_fpc1020/proximity_state";
    const GOODIX: &str = "/sys/devices/soc/soc:goodix_fp/proximity_state";

    #[test]
    fn known_model_resolves_to_its_entry() {
        let map = DeviceMap::default();
        assert_eq!(map.resolve("OnePlus5"), Path::new(FPC));
    }

    #[test]
    fn unknown_models_resolve_to_the_fallback() {
        let map = DeviceMap::default();
        assert_eq!(map.resolve("dumpling"), Path::new(GOODIX));
        assert_eq!(map.resolve(""), Path::new(GOODIX));
        assert_eq!(map.resolve("OnePlus5T"), Path::new(GOODIX));
        assert_eq!(map.resolve("OnePlus5 "), Path::new(GOODIX));
        assert_eq!(map.resolve("Oneplus5"), Path::new(GOODIX));
        assert_eq!(map.resolve("点心"), Path::new(GOODIX));
    }

    #[test]
    fn overlay_table_loads_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "entries": [{{ "model": "fajita", "path": "/sys/class/fp/proximity_state" }}],
                "fallback": "{GOODIX}"
            }}"#
        )
        .unwrap();

        let map = DeviceMap::load(file.path()).unwrap();
        assert_eq!(
            map.resolve("fajita"),
            Path::new("/sys/class/fp/proximity_state")
        );
        assert_eq!(map.resolve("OnePlus5"), Path::new(GOODIX));
    }

    #[test]
    fn malformed_overlay_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(DeviceMap::load(file.path()).is_err());
    }

    #[test]
    fn missing_overlay_is_an_error() {
        assert!(DeviceMap::load(Path::new("/nonexistent/devices.json")).is_err());
    }
}
