//! Playback timeline
//!
//! A small state machine over (playhead, step, playing) driven by host
//! ticks and user intents, plus the breakpoint data that maps steps to
//! playhead targets.

pub mod breakpoints;
pub mod events;
pub mod scheduler;

pub use breakpoints::{BreakpointError, BreakpointLoader, BreakpointSource, Breakpoints, MAX_STEPS};
pub use events::{Intent, TimelineEvent};
pub use scheduler::{PlayheadPhase, TimelineScheduler, TimelineSnapshot};
