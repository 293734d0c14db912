// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Pocketmode — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::DeviceMap;
pub use error::PocketmodeError;
pub use types::*;
