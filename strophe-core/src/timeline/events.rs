//! Timeline events and user intents

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observations produced by a scheduler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimelineEvent {
    /// Playhead snapped onto the target of `step`
    Settled { step: u16 },
    /// Auto-advance moved to `step`
    StepAdvanced { step: u16 },
    /// Playing reached the last step and stopped
    Finished,
}

/// User requests
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intent {
    /// Flip between playing and paused
    TogglePlay,
    /// Start playing
    Play,
    /// Stop playing
    Pause,
    /// One step later
    StepForward,
    /// One step earlier
    StepBackward,
    /// Go to an explicit step (clamped)
    SeekStep(u16),
    /// Go to step 0
    JumpToStart,
    /// Go to the last step
    JumpToEnd,
    /// Change the speed multiplier
    SetSpeed(f32),
}

impl Intent {
    /// Check whether this intent leaves playback running
    pub fn keeps_playing(&self) -> bool {
        matches!(self, Intent::TogglePlay | Intent::Play)
    }
}
