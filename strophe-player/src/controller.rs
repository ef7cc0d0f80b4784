//! Playback controller
//!
//! Owns everything needed to play one solve back:
//! - The solve script and its analyzed steps
//! - The timeline scheduler
//! - The breakpoint loader, polled until renderer timing is known
//! - The displayed cube, rebuilt from the script whenever the step changes
//!
//! The host calls `tick` once per frame and `apply` for every user intent,
//! then renders from the returned frame and the accessors.

use heapless::Vec;

use strophe_core::analyzer::StepRecord;
use strophe_core::config::PlaybackConfig;
use strophe_core::replay::{MirrorFlags, SolveScript};
use strophe_core::timeline::{
    BreakpointError, BreakpointLoader, BreakpointSource, Intent, TimelineEvent, TimelineScheduler,
    TimelineSnapshot, MAX_STEPS,
};
use strophe_core::traits::MoveIndexer;
use strophe_core::FaceletState;

/// Result of one controller tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Timeline state after the tick
    pub snapshot: TimelineSnapshot,
    /// Timeline event produced by the tick, if any
    pub event: Option<TimelineEvent>,
    /// Breakpoints were resolved during this tick
    pub breakpoints_loaded: bool,
    /// Displayed cube was rebuilt during this tick
    pub step_changed: bool,
}

/// Playback of a single solve
pub struct PlaybackController {
    script: SolveScript,
    records: Vec<StepRecord, MAX_STEPS>,
    timeline: TimelineScheduler,
    loader: BreakpointLoader,
    /// Cube after `shown_step` groups
    state: FaceletState,
    flags: MirrorFlags,
    shown_step: u16,
}

impl PlaybackController {
    /// Start playback of `script`, paused at the scrambled cube
    pub fn new(script: SolveScript, config: &PlaybackConfig) -> Result<Self, BreakpointError> {
        let loader = BreakpointLoader::new(script.leaf_boundaries(), config)?;
        let total = u16::try_from(script.len()).map_err(|_| BreakpointError::TooManySteps)?;
        let records = script.analyze();
        let state = script.state_at(0);

        info!("controller: {=u16} steps", total);

        Ok(Self {
            timeline: TimelineScheduler::new(total, *config),
            records,
            loader,
            flags: MirrorFlags::of(&state),
            state,
            shown_step: 0,
            script,
        })
    }

    /// Advance by `delta_ms` of wall time
    ///
    /// The timeline only runs once breakpoints are known; until then the
    /// loader is polled with `indexer` and intents still change the step.
    pub fn tick(&mut self, delta_ms: f32, indexer: Option<&dyn MoveIndexer>) -> Frame {
        let mut breakpoints_loaded = false;
        if let Some(breakpoints) = self.loader.poll(delta_ms, indexer) {
            self.timeline.load_breakpoints(breakpoints);
            breakpoints_loaded = true;
        }

        let event = if self.loader.is_resolved() && !breakpoints_loaded {
            self.timeline.tick(delta_ms)
        } else {
            None
        };

        Frame {
            snapshot: self.timeline.snapshot(),
            event,
            breakpoints_loaded,
            step_changed: self.sync_state(),
        }
    }

    /// Apply a user intent; false if it was rejected
    pub fn apply(&mut self, intent: Intent) -> bool {
        let accepted = self.timeline.apply(intent);
        self.sync_state();
        accepted
    }

    /// Rebuild the displayed cube if the step moved
    fn sync_state(&mut self) -> bool {
        let step = self.timeline.step();
        if step == self.shown_step {
            return false;
        }
        self.state = self.script.state_at(step as usize);
        self.flags = MirrorFlags::of(&self.state);
        self.shown_step = step;
        debug!("controller: showing step {=u16}", step);
        true
    }

    /// The script being played
    pub fn script(&self) -> &SolveScript {
        &self.script
    }

    /// Analysis of every step, in order
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Analysis of the most recently applied group
    pub fn active_record(&self) -> Option<&StepRecord> {
        self.records.get(self.timeline.active_group()?)
    }

    /// The cube as of the current step
    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    /// Milestones reached by the displayed cube
    pub fn flags(&self) -> MirrorFlags {
        self.flags
    }

    /// The timeline
    pub fn timeline(&self) -> &TimelineScheduler {
        &self.timeline
    }

    /// Current timeline state
    pub fn snapshot(&self) -> TimelineSnapshot {
        self.timeline.snapshot()
    }

    /// Check whether breakpoints are known
    pub fn is_ready(&self) -> bool {
        self.loader.is_resolved()
    }

    /// Where the breakpoints came from, once known
    pub fn breakpoint_source(&self) -> Option<BreakpointSource> {
        self.loader.source()
    }
}
