// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Unified error types for pocket mode.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all pocket-mode operations.
#[derive(Debug, Error)]
pub enum PocketmodeError {
    // -- Sensor errors --
    #[error("no proximity sensor available on this hardware")]
    NoProximitySensor,

    #[error("sensor registration failed: {0}")]
    Registration(String),

    // -- Write-path errors --
    #[error("proximity_state node not found: {path}")]
    TargetNotFound { path: PathBuf },

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Configuration --
    #[error("device table parse error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PocketmodeError>;
