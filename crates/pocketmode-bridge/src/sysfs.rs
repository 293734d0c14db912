// SPDX-License-Identifier: PMPL-1.0-or-later
//
// The write half of the bridge: mirroring a proximity state into a
// proximity_state sysfs node.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use pocketmode_core::error::{PocketmodeError, Result};
use pocketmode_core::types::ProximityState;
use tracing::{error, warn};

/// Fresh existence + write-permission check against the target node.
///
/// Performed per event and never cached: fingerprint drivers create and
/// remove their sysfs nodes as they probe, so yesterday's answer is wrong.
pub fn is_writable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => !metadata.permissions().readonly(),
        Err(_) => false,
    }
}

/// Write the state token into the node, replacing its entire contents.
///
/// The open never creates: a node that has vanished must not leave a stray
/// regular file behind in /sys. Exactly one ASCII character is written, no
/// trailing newline. The handle is released on every exit path by drop.
pub fn write_state(path: &Path, state: ProximityState) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), "no such node for writing");
                PocketmodeError::TargetNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                error!(path = %path.display(), "could not open node: {err}");
                PocketmodeError::Io(err)
            }
        })?;

    file.write_all(state.token().as_bytes()).map_err(|err| {
        error!(path = %path.display(), "could not write to node: {err}");
        PocketmodeError::Io(err)
    })?;

    Ok(())
}
