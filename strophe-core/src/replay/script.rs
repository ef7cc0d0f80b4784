//! Solve script

use core::fmt;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::analyzer::{analyze_step, StepContext, StepCounts, StepRecord, StepText};
use crate::cube::{append_moves, invert_moves, tokens, AlgString, FaceletState, NotationError};
use crate::oracle::{Progress, ProgressDiff, Stage};
use crate::timeline::MAX_STEPS;

/// Script construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptError {
    /// More move-groups than the timeline can hold
    TooManySteps,
    /// One move-group exceeds its capacity
    StepTooLong { index: usize },
    /// Flattened solution or scramble exceeds its capacity
    Notation(NotationError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::TooManySteps => write!(f, "solution has more than {} steps", MAX_STEPS),
            ScriptError::StepTooLong { index } => write!(f, "step {} is too long", index + 1),
            ScriptError::Notation(e) => write!(f, "{}", e),
        }
    }
}

impl From<NotationError> for ScriptError {
    fn from(e: NotationError) -> Self {
        ScriptError::Notation(e)
    }
}

/// A solution split into steps, with the scramble it undoes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveScript {
    groups: Vec<StepText, MAX_STEPS>,
    /// Inverse of the flattened solution
    scramble: AlgString,
    /// Cumulative leaf-move count after each group
    boundaries: Vec<usize, MAX_STEPS>,
}

impl SolveScript {
    /// Build from explicit move-groups, one step each
    pub fn from_groups<S: AsRef<str>>(groups: &[S]) -> Result<Self, ScriptError> {
        if groups.len() > MAX_STEPS {
            return Err(ScriptError::TooManySteps);
        }

        let mut steps = Vec::new();
        let mut boundaries = Vec::new();
        let mut flattened = AlgString::new();
        let mut leaves = 0;

        for (index, group) in groups.iter().enumerate() {
            let group = group.as_ref();
            let mut text = StepText::new();
            text.push_str(group.trim())
                .map_err(|_| ScriptError::StepTooLong { index })?;
            append_moves(&mut flattened, group)?;
            leaves += tokens(group).count();

            // Capacity checked above
            let _ = steps.push(text);
            let _ = boundaries.push(leaves);
        }

        let scramble = invert_moves(&flattened)?;
        info!(
            "script: {=usize} steps, {=usize} moves",
            steps.len(),
            leaves
        );

        Ok(Self {
            groups: steps,
            scramble,
            boundaries,
        })
    }

    /// Build from a flat solution string, one step per token
    pub fn from_solution(solution: &str) -> Result<Self, ScriptError> {
        let mut groups: Vec<&str, MAX_STEPS> = Vec::new();
        for token in tokens(solution) {
            groups.push(token).map_err(|_| ScriptError::TooManySteps)?;
        }
        Self::from_groups(groups.as_slice())
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether the script has no steps
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Move text of step `index`
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).map(|g| g.as_str())
    }

    /// All move-groups
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.as_str())
    }

    /// Scramble that the solution undoes
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    /// Cumulative leaf-move count after each step
    pub fn leaf_boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Cube after the first `step` groups (clamped to the step count)
    pub fn state_at(&self, step: usize) -> FaceletState {
        let mut state = FaceletState::new();
        state.apply_algorithm(&self.scramble);
        for group in self.groups.iter().take(step) {
            state.apply_algorithm(group);
        }
        state
    }

    /// Classify every step in order
    ///
    /// Walks the groups once from the scrambled cube, diffing the oracle
    /// before and after each group.
    pub fn analyze(&self) -> Vec<StepRecord, MAX_STEPS> {
        let mut records = Vec::new();
        let mut state = self.state_at(0);
        let mut before = Progress::of(&state);

        for (index, group) in self.groups.iter().enumerate() {
            state.apply_algorithm(group);
            let after = Progress::of(&state);

            let ctx = StepContext {
                index,
                total: self.groups.len(),
                stage: Stage::classify(&after),
                diff: ProgressDiff::between(&before, &after),
                counts: StepCounts {
                    cross: after.cross_count,
                    f2l: after.f2l.count(),
                },
            };
            // One record per group, same capacity
            let _ = records.push(analyze_step(group, &ctx));
            before = after;
        }

        records
    }
}

/// Milestone flags for the displayed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MirrorFlags {
    pub cross: bool,
    pub f2l: bool,
    pub oll: bool,
    pub solved: bool,
}

impl MirrorFlags {
    /// Evaluate the flags on `state`
    pub fn of(state: &FaceletState) -> Self {
        Self {
            cross: state.cross_solved(),
            f2l: state.f2l_solved(),
            oll: state.oll_solved(),
            solved: state.fully_solved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Technique;
    use crate::oracle::F2lSlot;

    #[test]
    fn test_scramble_is_inverse_of_solution() {
        let script = SolveScript::from_groups(&["R U R' U'", "F2"]).unwrap();
        assert_eq!(script.scramble(), "F2 U R U' R'");
        assert_eq!(script.leaf_boundaries(), &[4, 5]);
        assert!(script.state_at(2).fully_solved());
        assert!(!script.state_at(0).fully_solved());
    }

    #[test]
    fn test_from_solution_one_token_per_step() {
        let script = SolveScript::from_solution("  R  U' F2 ").unwrap();
        assert_eq!(script.len(), 3);
        assert_eq!(script.group(1), Some("U'"));
        assert_eq!(script.leaf_boundaries(), &[1, 2, 3]);
    }

    #[test]
    fn test_state_at_clamps() {
        let script = SolveScript::from_groups(&["R", "U"]).unwrap();
        assert_eq!(script.state_at(99), script.state_at(2));
        assert!(script.state_at(99).fully_solved());
    }

    #[test]
    fn test_state_at_matches_incremental_replay() {
        let script = SolveScript::from_groups(&["R U", "F' L2", "D B'", "x U"]).unwrap();
        let mut state = FaceletState::new();
        state.apply_algorithm(script.scramble());
        for step in 0..script.len() {
            assert_eq!(script.state_at(step), state);
            state.apply_algorithm(script.group(step).unwrap());
        }
        assert!(state.fully_solved());
    }

    #[test]
    fn test_capacity_errors() {
        let groups = [("R"); MAX_STEPS + 1];
        assert_eq!(SolveScript::from_groups(&groups), Err(ScriptError::TooManySteps));

        let bytes = [b'R'; 200];
        let long = core::str::from_utf8(&bytes).unwrap();
        assert_eq!(
            SolveScript::from_groups(&["U", long]),
            Err(ScriptError::StepTooLong { index: 1 })
        );
    }

    #[test]
    fn test_longest_script_inverts() {
        // 64 one-letter turns fill a group; each gains a prime when inverted
        let group = std::vec!["R"; 64].join(" ");
        assert!(group.len() <= crate::analyzer::MAX_STEP_LEN);
        let groups = std::vec![group.as_str(); MAX_STEPS];

        let script = SolveScript::from_groups(groups.as_slice()).unwrap();
        assert_eq!(script.len(), MAX_STEPS);
        assert_eq!(script.leaf_boundaries()[MAX_STEPS - 1], MAX_STEPS * 64);
        assert_eq!(script.scramble().len(), MAX_STEPS * 64 * 3 - 1);
        assert!(script.scramble().starts_with("R' R' "));
    }

    #[test]
    fn test_analyze_f2l_insert() {
        // Scramble breaks only the front-right slot
        let script = SolveScript::from_groups(&["R U R'"]).unwrap();
        assert_eq!(script.scramble(), "R U' R'");
        let records = script.analyze();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        // All slots done and everything solved after the step
        assert_eq!(record.stage, Stage::Pll);
        assert_eq!(record.technique, Some(Technique::SolvedPll));
        assert_eq!(record.summary.as_str(), "PLL: Solved PLL");
        assert_eq!(record.move_count, 3);
        assert_eq!(record.progress, 100);
        assert!(record.is_first && record.is_last);
        assert_eq!(record.patterns.len(), 1);
        assert_eq!(record.patterns[0].name, "Right Insert");
    }

    #[test]
    fn test_analyze_cross_steps() {
        let script = SolveScript::from_groups(&["F2", "R2"]).unwrap();
        let records = script.analyze();

        // After F2 the cross still misses the right edge. The front-left
        // slot completes too and outranks the cross edge.
        assert_eq!(records[0].stage, Stage::Cross);
        assert_eq!(records[0].technique, Some(Technique::Inserted(F2lSlot::FrontLeft)));
        assert_eq!(records[0].summary.as_str(), "Cross - Edge 3");
        assert_eq!(records[0].progress, 50);

        assert_eq!(records[1].stage, Stage::Pll);
        assert_eq!(records[1].summary.as_str(), "PLL: Solved PLL");
        assert!(records[1].is_last);
    }

    #[test]
    fn test_analyze_slot_technique() {
        let script = SolveScript::from_groups(&["R U R'", "F R U R' U' F'"]).unwrap();
        let records = script.analyze();
        assert_eq!(records[0].technique, Some(Technique::Inserted(F2lSlot::FrontRight)));
        assert_eq!(records[0].stage, Stage::Oll);
        assert_eq!(records[0].summary.as_str(), "OLL: Inserted Front-Right Pair");

        assert_eq!(records[1].technique, Some(Technique::SolvedPll));
        assert_eq!(records[1].patterns[0].name, "Sexy Move");
    }

    #[test]
    fn test_mirror_flags() {
        let script = SolveScript::from_groups(&["R U R'"]).unwrap();
        let flags = MirrorFlags::of(&script.state_at(0));
        assert!(flags.cross);
        assert!(!flags.f2l);
        assert!(!flags.solved);
        assert_eq!(
            MirrorFlags::of(&script.state_at(1)),
            MirrorFlags {
                cross: true,
                f2l: true,
                oll: true,
                solved: true
            }
        );
    }
}
