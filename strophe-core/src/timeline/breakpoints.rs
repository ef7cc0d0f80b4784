//! Step breakpoints
//!
//! A breakpoint is the timestamp at which a step's last move finishes
//! animating. The authoritative source is the host renderer's move indexer;
//! when it is slow or returns nonsense the loader substitutes evenly spaced
//! breakpoints so playback never blocks.

use core::fmt;

use heapless::Vec;

use crate::config::PlaybackConfig;
use crate::traits::MoveIndexer;

/// Maximum steps in one solve
pub const MAX_STEPS: usize = 64;

/// Breakpoint acquisition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BreakpointError {
    /// Fewer positive step ends than steps
    Incomplete { valid: usize, steps: usize },
    /// Step `step` ends before the step preceding it
    OutOfOrder { step: usize },
    /// More steps than the timeline can hold
    TooManySteps,
}

impl fmt::Display for BreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakpointError::Incomplete { valid, steps } => {
                write!(f, "only {} of {} step ends resolved", valid, steps)
            }
            BreakpointError::OutOfOrder { step } => {
                write!(f, "step {} ends before the step preceding it", step + 1)
            }
            BreakpointError::TooManySteps => write!(f, "more than {} steps", MAX_STEPS),
        }
    }
}

/// Per-step end timestamps plus the total duration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Breakpoints {
    ends: Vec<f32, MAX_STEPS>,
    duration_ms: f32,
}

impl Breakpoints {
    /// No steps, zero duration
    pub const fn empty() -> Self {
        Self {
            ends: Vec::new(),
            duration_ms: 0.0,
        }
    }

    /// Build from explicit end timestamps and duration
    ///
    /// The timestamps must be non-decreasing.
    pub fn new(ends: &[f32], duration_ms: f32) -> Result<Self, BreakpointError> {
        check_order(ends)?;
        let ends = Vec::from_slice(ends).map_err(|_| BreakpointError::TooManySteps)?;
        Ok(Self {
            ends,
            duration_ms: sanitize(duration_ms),
        })
    }

    /// Query the renderer for the end of every step
    ///
    /// `boundaries[i]` is the cumulative leaf-move count after step `i`, so
    /// the step's last leaf is `boundaries[i] - 1`. A step whose end cannot
    /// be resolved counts as zero; any such step makes the result invalid,
    /// as does a step ending before its predecessor.
    pub fn from_indexer(
        boundaries: &[usize],
        indexer: &dyn MoveIndexer,
    ) -> Result<Self, BreakpointError> {
        if boundaries.len() > MAX_STEPS {
            return Err(BreakpointError::TooManySteps);
        }

        let mut ends = Vec::new();
        for &end_leaf in boundaries {
            let end = match end_leaf.checked_sub(1) {
                Some(leaf) => indexer.move_end(leaf).map(sanitize).unwrap_or(0.0),
                None => 0.0,
            };
            // Capacity checked above
            let _ = ends.push(end);
        }

        let mut valid = ends.iter().copied().filter(|&end| end > 0.0);
        let count = valid.clone().count();
        if count < boundaries.len() {
            return Err(BreakpointError::Incomplete {
                valid: count,
                steps: boundaries.len(),
            });
        }
        check_order(&ends)?;
        let duration_ms = valid.next_back().unwrap_or(0.0);

        Ok(Self { ends, duration_ms })
    }

    /// Evenly spaced breakpoints: step `i` ends at `(i + 1) * spacing_ms`
    pub fn fallback(steps: usize, spacing_ms: f32) -> Self {
        let spacing_ms = sanitize(spacing_ms);
        let mut ends = Vec::new();
        for i in 0..steps.min(MAX_STEPS) {
            let _ = ends.push((i + 1) as f32 * spacing_ms);
        }
        let duration_ms = ends.last().copied().unwrap_or(0.0);
        Self { ends, duration_ms }
    }

    /// Number of steps covered
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Check whether there are no breakpoints
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// End timestamp of step `index`
    pub fn get(&self, index: usize) -> Option<f32> {
        self.ends.get(index).copied()
    }

    /// All end timestamps
    pub fn as_slice(&self) -> &[f32] {
        &self.ends
    }

    /// Total duration (ms)
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Playhead target for a step index
    ///
    /// Step 0 is the start of the timeline; step `n` is the end of the
    /// `n`th group, or the full duration past the last breakpoint.
    pub fn target_for(&self, step: usize) -> f32 {
        match step.checked_sub(1) {
            None => 0.0,
            Some(index) => self.get(index).unwrap_or(self.duration_ms),
        }
    }
}

fn check_order(ends: &[f32]) -> Result<(), BreakpointError> {
    match ends.windows(2).position(|pair| pair[1] < pair[0]) {
        Some(index) => Err(BreakpointError::OutOfOrder { step: index + 1 }),
        None => Ok(()),
    }
}

fn sanitize(ms: f32) -> f32 {
    if ms.is_finite() && ms > 0.0 {
        ms
    } else {
        0.0
    }
}

/// Where a loaded breakpoint list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BreakpointSource {
    Indexer,
    Fallback,
}

/// Bounded wait for renderer timing
///
/// Polled once per host tick. Resolves exactly once: with the indexer's
/// breakpoints as soon as it reports ready and valid data, or with the
/// fallback when the data is invalid or the timeout expires.
#[derive(Debug, Clone)]
pub struct BreakpointLoader {
    boundaries: Vec<usize, MAX_STEPS>,
    elapsed_ms: f32,
    timeout_ms: f32,
    spacing_ms: f32,
    source: Option<BreakpointSource>,
}

impl BreakpointLoader {
    /// Start waiting for breakpoints of the given step boundaries
    pub fn new(boundaries: &[usize], config: &PlaybackConfig) -> Result<Self, BreakpointError> {
        Ok(Self {
            boundaries: Vec::from_slice(boundaries).map_err(|_| BreakpointError::TooManySteps)?,
            elapsed_ms: 0.0,
            timeout_ms: config.breakpoint_timeout_ms,
            spacing_ms: config.fallback_step_ms,
            source: None,
        })
    }

    /// Advance the wait
    ///
    /// Returns the breakpoints on the poll that resolves, None before and
    /// after it.
    pub fn poll(&mut self, delta_ms: f32, indexer: Option<&dyn MoveIndexer>) -> Option<Breakpoints> {
        if self.source.is_some() {
            return None;
        }
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }

        if let Some(indexer) = indexer.filter(|i| i.is_ready()) {
            return match Breakpoints::from_indexer(&self.boundaries, indexer) {
                Ok(breakpoints) => {
                    info!(
                        "breakpoints from indexer: {=usize} steps, {=f32} ms",
                        breakpoints.len(),
                        breakpoints.duration_ms()
                    );
                    self.source = Some(BreakpointSource::Indexer);
                    Some(breakpoints)
                }
                Err(e) => {
                    warn!("indexer breakpoints rejected: {}", e);
                    Some(self.fall_back())
                }
            };
        }

        if self.elapsed_ms >= self.timeout_ms {
            warn!("indexer not ready after {=f32} ms", self.elapsed_ms);
            return Some(self.fall_back());
        }

        None
    }

    fn fall_back(&mut self) -> Breakpoints {
        self.source = Some(BreakpointSource::Fallback);
        Breakpoints::fallback(self.boundaries.len(), self.spacing_ms)
    }

    /// Check whether the loader has produced its breakpoints
    pub fn is_resolved(&self) -> bool {
        self.source.is_some()
    }

    /// Source of the resolved breakpoints
    pub fn source(&self) -> Option<BreakpointSource> {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every leaf takes `move_ms`, leaves past `known` are unknown
    struct FixedIndexer {
        ready: bool,
        move_ms: f32,
        known: usize,
    }

    impl MoveIndexer for FixedIndexer {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn move_start(&self, leaf: usize) -> Option<f32> {
            (leaf < self.known).then(|| leaf as f32 * self.move_ms)
        }

        fn move_duration(&self, leaf: usize) -> Option<f32> {
            (leaf < self.known).then_some(self.move_ms)
        }
    }

    /// Later leaves end earlier
    struct ReversedIndexer;

    impl MoveIndexer for ReversedIndexer {
        fn is_ready(&self) -> bool {
            true
        }

        fn move_start(&self, leaf: usize) -> Option<f32> {
            Some(1000.0 - leaf as f32 * 100.0)
        }

        fn move_duration(&self, _leaf: usize) -> Option<f32> {
            Some(100.0)
        }
    }

    fn indexer(known: usize) -> FixedIndexer {
        FixedIndexer {
            ready: true,
            move_ms: 100.0,
            known,
        }
    }

    #[test]
    fn test_from_indexer() {
        // Steps of 2, 3 and 1 moves
        let breakpoints = Breakpoints::from_indexer(&[2, 5, 6], &indexer(6)).unwrap();
        assert_eq!(breakpoints.as_slice(), &[200.0, 500.0, 600.0]);
        assert_eq!(breakpoints.duration_ms(), 600.0);
    }

    #[test]
    fn test_from_indexer_incomplete() {
        let result = Breakpoints::from_indexer(&[2, 5, 6], &indexer(4));
        assert_eq!(result, Err(BreakpointError::Incomplete { valid: 1, steps: 3 }));
    }

    #[test]
    fn test_from_indexer_empty_group() {
        // A group with no leaves ends at leaf "-1"
        let result = Breakpoints::from_indexer(&[0, 2], &indexer(2));
        assert_eq!(result, Err(BreakpointError::Incomplete { valid: 1, steps: 2 }));
    }

    #[test]
    fn test_decreasing_ends_rejected() {
        assert_eq!(
            Breakpoints::new(&[1000.0, 800.0, 2000.0], 2000.0),
            Err(BreakpointError::OutOfOrder { step: 1 })
        );
        // Equal ends are allowed
        assert!(Breakpoints::new(&[1000.0, 1000.0], 1000.0).is_ok());
    }

    #[test]
    fn test_from_indexer_out_of_order() {
        let result = Breakpoints::from_indexer(&[2, 5, 6], &ReversedIndexer);
        assert_eq!(result, Err(BreakpointError::OutOfOrder { step: 1 }));

        let mut loader = BreakpointLoader::new(&[2, 5, 6], &PlaybackConfig::default()).unwrap();
        let breakpoints = loader.poll(16.0, Some(&ReversedIndexer)).unwrap();
        assert_eq!(breakpoints.as_slice(), &[1500.0, 3000.0, 4500.0]);
        assert_eq!(loader.source(), Some(BreakpointSource::Fallback));
    }

    #[test]
    fn test_fallback() {
        let breakpoints = Breakpoints::fallback(3, 1500.0);
        assert_eq!(breakpoints.as_slice(), &[1500.0, 3000.0, 4500.0]);
        assert_eq!(breakpoints.duration_ms(), 4500.0);
        assert_eq!(Breakpoints::fallback(0, 1500.0).duration_ms(), 0.0);
    }

    #[test]
    fn test_target_for() {
        let breakpoints = Breakpoints::new(&[1000.0, 2000.0], 2500.0).unwrap();
        assert_eq!(breakpoints.target_for(0), 0.0);
        assert_eq!(breakpoints.target_for(1), 1000.0);
        assert_eq!(breakpoints.target_for(2), 2000.0);
        assert_eq!(breakpoints.target_for(3), 2500.0);
    }

    #[test]
    fn test_loader_uses_ready_indexer() {
        let mut loader = BreakpointLoader::new(&[2, 5], &PlaybackConfig::default()).unwrap();
        let source = indexer(5);
        let breakpoints = loader.poll(16.0, Some(&source)).unwrap();
        assert_eq!(breakpoints.as_slice(), &[200.0, 500.0]);
        assert_eq!(loader.source(), Some(BreakpointSource::Indexer));
        assert!(loader.poll(16.0, Some(&source)).is_none());
    }

    #[test]
    fn test_loader_falls_back_on_invalid_data() {
        let mut loader = BreakpointLoader::new(&[2, 5], &PlaybackConfig::default()).unwrap();
        let breakpoints = loader.poll(16.0, Some(&indexer(1))).unwrap();
        assert_eq!(breakpoints.as_slice(), &[1500.0, 3000.0]);
        assert_eq!(loader.source(), Some(BreakpointSource::Fallback));
    }

    #[test]
    fn test_loader_falls_back_after_timeout_once() {
        let config = PlaybackConfig {
            breakpoint_timeout_ms: 100.0,
            ..PlaybackConfig::default()
        };
        let mut loader = BreakpointLoader::new(&[1, 2, 3], &config).unwrap();
        let waiting = FixedIndexer {
            ready: false,
            move_ms: 100.0,
            known: 3,
        };

        assert!(loader.poll(60.0, Some(&waiting)).is_none());
        assert!(!loader.is_resolved());
        let breakpoints = loader.poll(60.0, None).unwrap();
        assert_eq!(breakpoints.len(), 3);
        assert_eq!(breakpoints.duration_ms(), 4500.0);

        // Indexer becoming ready later changes nothing
        assert!(loader.poll(16.0, Some(&indexer(3))).is_none());
        assert_eq!(loader.source(), Some(BreakpointSource::Fallback));
    }
}
