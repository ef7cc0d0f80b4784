//! Configuration type definitions

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cube::Face;

/// Default snap distance (ms)
pub const DEFAULT_DEADBAND_MS: f32 = 10.0;

/// Default pause at each breakpoint before auto-advancing (ms at 1x)
pub const DEFAULT_STEP_PAUSE_MS: f32 = 200.0;

/// Default breakpoint spacing when renderer timing is unavailable (ms)
pub const DEFAULT_FALLBACK_STEP_MS: f32 = 1500.0;

/// Default wait for renderer timing before falling back (ms)
pub const DEFAULT_BREAKPOINT_TIMEOUT_MS: f32 = 2000.0;

/// Default scan order
pub const DEFAULT_SCAN_ORDER: [Face; 6] = [
    Face::Front,
    Face::Right,
    Face::Up,
    Face::Left,
    Face::Down,
    Face::Back,
];

/// Playback tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaybackConfig {
    /// Distance below which the playhead snaps to its target (ms)
    pub deadband_ms: f32,
    /// Pause at a reached breakpoint while playing, divided by speed (ms)
    pub step_pause_ms: f32,
    /// Per-step spacing of fallback breakpoints (ms)
    pub fallback_step_ms: f32,
    /// Wait for renderer timing before using the fallback (ms)
    pub breakpoint_timeout_ms: f32,
    /// Initial speed multiplier
    pub default_speed: f32,
    /// Slowest allowed speed multiplier
    pub min_speed: f32,
    /// Fastest allowed speed multiplier
    pub max_speed: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            deadband_ms: DEFAULT_DEADBAND_MS,
            step_pause_ms: DEFAULT_STEP_PAUSE_MS,
            fallback_step_ms: DEFAULT_FALLBACK_STEP_MS,
            breakpoint_timeout_ms: DEFAULT_BREAKPOINT_TIMEOUT_MS,
            default_speed: 1.0,
            min_speed: 0.25,
            max_speed: 3.0,
        }
    }
}

/// Reason a configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigIssue {
    /// A duration is negative or not finite
    BadDuration(&'static str),
    /// Fallback spacing must be positive
    ZeroFallbackSpacing,
    /// Speed bounds are not `0 < min <= default <= max`
    BadSpeedRange,
    /// Scan order does not name each face exactly once
    BadScanOrder,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::BadDuration(key) => write!(f, "{} must be a finite, non-negative duration", key),
            ConfigIssue::ZeroFallbackSpacing => write!(f, "fallback_step_ms must be positive"),
            ConfigIssue::BadSpeedRange => {
                write!(f, "speeds must satisfy 0 < min_speed <= default_speed <= max_speed")
            }
            ConfigIssue::BadScanOrder => write!(f, "scan order must list each face exactly once"),
        }
    }
}

impl PlaybackConfig {
    /// Check ranges
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        for (key, value) in [
            ("deadband_ms", self.deadband_ms),
            ("step_pause_ms", self.step_pause_ms),
            ("fallback_step_ms", self.fallback_step_ms),
            ("breakpoint_timeout_ms", self.breakpoint_timeout_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigIssue::BadDuration(key));
            }
        }
        if self.fallback_step_ms <= 0.0 {
            return Err(ConfigIssue::ZeroFallbackSpacing);
        }
        let speeds_ok = self.min_speed.is_finite()
            && self.max_speed.is_finite()
            && self.min_speed > 0.0
            && self.min_speed <= self.default_speed
            && self.default_speed <= self.max_speed;
        if !speeds_ok {
            return Err(ConfigIssue::BadSpeedRange);
        }
        Ok(())
    }

    /// Copy with every value forced into range
    ///
    /// Negative or non-finite durations become 0 and an unusable fallback
    /// spacing takes its default. Speed bounds that are not positive take
    /// their defaults, and `default_speed` is clamped between them.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let duration = |ms: f32| if ms.is_finite() && ms >= 0.0 { ms } else { 0.0 };
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };

        let min_speed = positive(self.min_speed, defaults.min_speed);
        let max_speed = positive(self.max_speed, defaults.max_speed).max(min_speed);
        let default_speed = if self.default_speed.is_finite() {
            self.default_speed
        } else {
            defaults.default_speed
        };

        Self {
            deadband_ms: duration(self.deadband_ms),
            step_pause_ms: duration(self.step_pause_ms),
            fallback_step_ms: positive(self.fallback_step_ms, defaults.fallback_step_ms),
            breakpoint_timeout_ms: duration(self.breakpoint_timeout_ms),
            default_speed: default_speed.clamp(min_speed, max_speed),
            min_speed,
            max_speed,
        }
    }
}

/// Face scan settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// Order in which the user is prompted for faces
    pub order: [Face; 6],
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_SCAN_ORDER,
        }
    }
}

impl ScanConfig {
    /// Check that the order is a permutation of the six faces
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        let mut seen = [false; 6];
        for face in self.order {
            if seen[face.index()] {
                return Err(ConfigIssue::BadScanOrder);
            }
            seen[face.index()] = true;
        }
        Ok(())
    }
}
