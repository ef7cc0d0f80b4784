//! Playback scheduler
//!
//! Moves a playhead (milliseconds) toward the breakpoint of the current
//! step at `speed` milliseconds per elapsed millisecond, snapping once it is
//! within the deadband. While playing, a settled playhead waits a short
//! pause and then advances to the next step.
//!
//! The scheduler never sleeps: the host calls `tick` once per frame with
//! the elapsed time, and applies user intents in between.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::breakpoints::Breakpoints;
use super::events::{Intent, TimelineEvent};
use crate::config::PlaybackConfig;

/// Interpolation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayheadPhase {
    /// Playhead sits on the step's target
    Settled,
    /// Playhead is moving toward the step's target
    Interpolating,
}

/// Observable timeline state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimelineSnapshot {
    /// Playhead (ms)
    pub time_ms: f32,
    /// Current step (0 = before the first group)
    pub step: u16,
    /// Number of steps
    pub total_steps: u16,
    /// Timeline length (ms)
    pub duration_ms: f32,
    pub playing: bool,
    /// Speed multiplier
    pub speed: f32,
    pub phase: PlayheadPhase,
}

/// Step timeline
#[derive(Debug, Clone)]
pub struct TimelineScheduler {
    /// Playhead (ms), always within [0, duration]
    current_ms: f32,
    /// Current step, always within [0, total_steps]
    step: u16,
    total_steps: u16,
    breakpoints: Breakpoints,
    playing: bool,
    speed: f32,
    /// Time spent settled while playing (ms)
    settled_ms: f32,
    config: PlaybackConfig,
}

impl TimelineScheduler {
    /// Create a stopped timeline at step 0 with no breakpoints yet
    ///
    /// Out-of-range config values are forced into range so the speed stays
    /// positive and the playhead can always settle.
    pub fn new(total_steps: u16, config: PlaybackConfig) -> Self {
        let sanitized = config.sanitized();
        if sanitized != config {
            warn!("timeline: playback config out of range, clamped");
        }
        let config = sanitized;
        Self {
            current_ms: 0.0,
            step: 0,
            total_steps,
            breakpoints: Breakpoints::empty(),
            playing: false,
            speed: config.default_speed,
            settled_ms: 0.0,
            config,
        }
    }

    /// Create a timeline with breakpoints already known
    pub fn with_breakpoints(total_steps: u16, breakpoints: Breakpoints, config: PlaybackConfig) -> Self {
        let mut scheduler = Self::new(total_steps, config);
        scheduler.load_breakpoints(breakpoints);
        scheduler
    }

    /// Replace the breakpoint list
    ///
    /// The playhead is clamped into the new duration; step and playing
    /// state are kept.
    pub fn load_breakpoints(&mut self, breakpoints: Breakpoints) {
        debug!(
            "timeline: {=usize} breakpoints, {=f32} ms",
            breakpoints.len(),
            breakpoints.duration_ms()
        );
        self.breakpoints = breakpoints;
        self.clamp_time();
    }

    /// Playhead (ms)
    pub fn time_ms(&self) -> f32 {
        self.current_ms
    }

    /// Current step
    pub fn step(&self) -> u16 {
        self.step
    }

    /// Number of steps
    pub fn total_steps(&self) -> u16 {
        self.total_steps
    }

    /// Timeline length (ms)
    pub fn duration_ms(&self) -> f32 {
        self.breakpoints.duration_ms()
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Loaded breakpoints
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Index of the group whose end the playhead is heading to, if any
    pub fn active_group(&self) -> Option<usize> {
        (self.step as usize).checked_sub(1)
    }

    /// Playhead target for the current step
    pub fn target_ms(&self) -> f32 {
        self.breakpoints
            .target_for(self.step as usize)
            .clamp(0.0, self.duration_ms())
    }

    /// Interpolation phase
    pub fn phase(&self) -> PlayheadPhase {
        if distance(self.target_ms(), self.current_ms) <= self.config.deadband_ms {
            PlayheadPhase::Settled
        } else {
            PlayheadPhase::Interpolating
        }
    }

    /// Capture the observable state
    pub fn snapshot(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            time_ms: self.current_ms,
            step: self.step,
            total_steps: self.total_steps,
            duration_ms: self.duration_ms(),
            playing: self.playing,
            speed: self.speed,
            phase: self.phase(),
        }
    }

    /// Advance the timeline by `delta_ms` of wall time
    ///
    /// Returns an event if the playhead settled, the step auto-advanced, or
    /// playback finished. At most one event is returned: a tick that snaps
    /// onto the target and also ends the pause reports only the advance
    /// (or `Finished`), with the playhead left on the reached breakpoint.
    pub fn tick(&mut self, delta_ms: f32) -> Option<TimelineEvent> {
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        let target = self.target_ms();
        let mut event = None;

        if distance(target, self.current_ms) <= self.config.deadband_ms {
            if self.current_ms != target {
                self.current_ms = target;
                event = Some(TimelineEvent::Settled { step: self.step });
            }

            if self.playing {
                self.settled_ms += delta_ms;
                if self.settled_ms > self.config.step_pause_ms / self.speed {
                    self.settled_ms = 0.0;
                    event = Some(self.advance());
                }
            } else {
                self.settled_ms = 0.0;
            }
        } else {
            self.settled_ms = 0.0;
            let stride = (delta_ms * self.speed).min(distance(target, self.current_ms));
            if target > self.current_ms {
                self.current_ms += stride;
            } else {
                self.current_ms -= stride;
            }
        }

        self.clamp_time();
        event
    }

    /// Auto-advance after the pause, or stop at the last step
    fn advance(&mut self) -> TimelineEvent {
        if self.step < self.total_steps {
            self.step += 1;
            debug!("timeline: advance to step {=u16}", self.step);
            TimelineEvent::StepAdvanced { step: self.step }
        } else {
            self.playing = false;
            info!("timeline: finished at step {=u16}", self.step);
            TimelineEvent::Finished
        }
    }

    fn clamp_time(&mut self) {
        self.current_ms = self.current_ms.clamp(0.0, self.duration_ms());
    }

    /// Apply a user intent
    ///
    /// Every intent except `TogglePlay` and `Play` stops playback. Returns
    /// false when the intent was rejected (a speed that is not a positive
    /// finite number), in which case nothing changes.
    pub fn apply(&mut self, intent: Intent) -> bool {
        if let Intent::SetSpeed(speed) = intent {
            if !speed.is_finite() || speed <= 0.0 {
                warn!("timeline: rejected speed {=f32}", speed);
                return false;
            }
        }
        if !intent.keeps_playing() {
            self.playing = false;
        }

        match intent {
            Intent::TogglePlay => self.playing = !self.playing,
            Intent::Play => self.playing = true,
            Intent::Pause => {}
            Intent::StepForward => self.seek_step(self.step.saturating_add(1)),
            Intent::StepBackward => self.seek_step(self.step.saturating_sub(1)),
            Intent::SeekStep(step) => self.seek_step(step),
            Intent::JumpToStart => self.seek_step(0),
            Intent::JumpToEnd => self.seek_step(self.total_steps),
            Intent::SetSpeed(speed) => {
                self.speed = speed.clamp(self.config.min_speed, self.config.max_speed)
            }
        }
        true
    }

    fn seek_step(&mut self, step: u16) {
        self.step = step.min(self.total_steps);
    }

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) {
        self.apply(Intent::TogglePlay);
    }

    /// Start playing
    pub fn play(&mut self) {
        self.apply(Intent::Play);
    }

    /// Stop playing
    pub fn pause(&mut self) {
        self.apply(Intent::Pause);
    }

    /// Go one step forward and stop
    pub fn step_forward(&mut self) {
        self.apply(Intent::StepForward);
    }

    /// Go one step back and stop
    pub fn step_backward(&mut self) {
        self.apply(Intent::StepBackward);
    }

    /// Go to `step` (clamped) and stop
    pub fn seek(&mut self, step: u16) {
        self.apply(Intent::SeekStep(step));
    }

    /// Go to step 0 and stop
    pub fn jump_to_start(&mut self) {
        self.apply(Intent::JumpToStart);
    }

    /// Go to the last step and stop
    pub fn jump_to_end(&mut self) {
        self.apply(Intent::JumpToEnd);
    }

    /// Change speed; false if `speed` is not a positive finite number
    pub fn set_speed(&mut self, speed: f32) -> bool {
        self.apply(Intent::SetSpeed(speed))
    }
}

fn distance(a: f32, b: f32) -> f32 {
    if a > b {
        a - b
    } else {
        b - a
    }
}
