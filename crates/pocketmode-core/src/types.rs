// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Core domain types for the pocket-mode proximity bridge.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Binary near/far classification of a proximity reading.
///
/// Derived fresh on every sensor event; never retained, so repeated
/// identical states are written out again rather than suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProximityState {
    /// An object is within the sensor's detection range.
    Near,
    /// Nothing within range (or exactly at the range boundary).
    Far,
}

impl ProximityState {
    /// Classify a raw distance reading against the sensor's static maximum
    /// range. A reading at exactly the maximum range counts as `Far`.
    pub fn from_reading(reading: f32, maximum_range: f32) -> Self {
        if reading < maximum_range {
            Self::Near
        } else {
            Self::Far
        }
    }

    /// The single-character token written into the proximity_state node.
    pub fn token(self) -> &'static str {
        match self {
            Self::Near => "1",
            Self::Far => "0",
        }
    }
}

impl std::fmt::Display for ProximityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Near => write!(f, "near"),
            Self::Far => write!(f, "far"),
        }
    }
}

/// Reported accuracy of a sensor stream. Carried on accuracy-change
/// callbacks; the bridge ignores it, but sources must be able to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorAccuracy {
    Unreliable,
    Low,
    Medium,
    High,
}

/// How often a listener wants readings delivered. A hint, not a contract —
/// sources may deliver faster or slower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryRate {
    /// Suitable for screen-state style decisions. The bridge's default.
    Normal,
    /// Suitable for driving UI updates.
    Ui,
    /// As fast as the source can produce readings.
    Fastest,
}

impl DeliveryRate {
    /// Polling interval used by sources that poll rather than block on
    /// hardware events.
    pub fn interval(self) -> Duration {
        match self {
            Self::Normal => Duration::from_millis(200),
            Self::Ui => Duration::from_millis(60),
            Self::Fastest => Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_below_range_is_near() {
        assert_eq!(
            ProximityState::from_reading(3.0, 5.0),
            ProximityState::Near
        );
    }

    #[test]
    fn reading_at_range_boundary_is_far() {
        // The boundary belongs to Far: only strictly-closer readings gate
        // the fingerprint sensor.
        assert_eq!(ProximityState::from_reading(5.0, 5.0), ProximityState::Far);
    }

    #[test]
    fn reading_beyond_range_is_far() {
        assert_eq!(ProximityState::from_reading(9.5, 5.0), ProximityState::Far);
    }

    #[test]
    fn tokens_are_single_ascii_characters() {
        assert_eq!(ProximityState::Near.token(), "1");
        assert_eq!(ProximityState::Far.token(), "0");
    }

    #[test]
    fn normal_rate_is_the_slowest() {
        assert!(DeliveryRate::Normal.interval() > DeliveryRate::Ui.interval());
        assert!(DeliveryRate::Ui.interval() > DeliveryRate::Fastest.interval());
    }
}
