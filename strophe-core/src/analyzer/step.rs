//! Step classification
//!
//! Turns one move-group plus the oracle diff it produced into a record
//! for display: summary line, detail text, technique, complexity.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use super::catalogue::{normalize, recognize, Pattern, PATTERN_COUNT};
use crate::cube::count_turns;
use crate::oracle::{F2lSlot, ProgressDiff, Stage};

/// Maximum length of one move-group in bytes
pub const MAX_STEP_LEN: usize = 128;

/// Move text of one step
pub type StepText = String<MAX_STEP_LEN>;

/// Summary line capacity
pub const MAX_SUMMARY_LEN: usize = 48;

/// Detail text capacity
pub const MAX_DETAIL_LEN: usize = 192;

/// What a step accomplished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Technique {
    /// Cross edges gained during the cross stage
    CrossEdges(u8),
    /// An F2L slot was completed
    Inserted(F2lSlot),
    /// Up face became uniform
    SolvedOll,
    /// Up and side faces became uniform
    SolvedPll,
    /// No physical milestone, but the moves match a known algorithm
    Pattern(&'static Pattern),
}

impl Technique {
    /// Physical milestone reported by a diff, if any
    ///
    /// Later milestones override earlier ones: cross edges (cross stage
    /// only), then slots in front-right, front-left, back-right, back-left
    /// order, then OLL, then PLL.
    pub fn from_diff(stage: Stage, diff: &ProgressDiff) -> Option<Self> {
        let mut technique = None;

        if stage == Stage::Cross && diff.cross_change > 0 {
            technique = Some(Technique::CrossEdges(diff.cross_change as u8));
        }
        for slot in [
            F2lSlot::FrontRight,
            F2lSlot::FrontLeft,
            F2lSlot::BackRight,
            F2lSlot::BackLeft,
        ] {
            if diff.f2l_change.get(slot) {
                technique = Some(Technique::Inserted(slot));
            }
        }
        if diff.oll_solved {
            technique = Some(Technique::SolvedOll);
        }
        if diff.pll_solved {
            technique = Some(Technique::SolvedPll);
        }

        technique
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Technique::CrossEdges(1) => write!(f, "Solved 1 Cross Edge"),
            Technique::CrossEdges(n) => write!(f, "Solved {} Cross Edges", n),
            Technique::Inserted(slot) => write!(f, "Inserted {} Pair", slot.name()),
            Technique::SolvedOll => write!(f, "Solved OLL"),
            Technique::SolvedPll => write!(f, "Solved PLL"),
            Technique::Pattern(pattern) => f.write_str(pattern.name),
        }
    }
}

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl Complexity {
    /// Score a step: turn count, +2 for any reorientation, +1 for any wide move
    pub fn score(move_count: usize, moves: &str) -> usize {
        let mut score = move_count;
        if moves.chars().any(|c| matches!(c, 'x' | 'y' | 'z' | 'X' | 'Y' | 'Z')) {
            score += 2;
        }
        if has_wide_move(moves) {
            score += 1;
        }
        score
    }

    /// Tier for a score
    pub const fn from_score(score: usize) -> Self {
        match score {
            0..=4 => Complexity::Basic,
            5..=8 => Complexity::Intermediate,
            9..=12 => Complexity::Advanced,
            _ => Complexity::Expert,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Complexity::Basic => "Basic",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
            Complexity::Expert => "Expert",
        }
    }
}

/// A face letter immediately followed by a lowercase `w`
fn has_wide_move(moves: &str) -> bool {
    moves.as_bytes().windows(2).any(|pair| {
        matches!(pair[0].to_ascii_uppercase(), b'R' | b'L' | b'F' | b'B' | b'U' | b'D')
            && pair[1] == b'w'
    })
}

/// Milestones reached before and including this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepCounts {
    /// Cross edges in place after the step
    pub cross: u8,
    /// F2L slots complete after the step
    pub f2l: u8,
}

/// Everything the analyzer knows about one step besides its moves
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    /// Step position (0-based)
    pub index: usize,
    /// Number of steps in the solve
    pub total: usize,
    /// Stage reached after the step
    pub stage: Stage,
    /// Counter changes across the step
    pub diff: ProgressDiff,
    /// Counters after the step
    pub counts: StepCounts,
}

/// Display record for one step
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepRecord {
    /// Move text as given
    pub moves: StepText,
    /// One-line summary, e.g. `F2L Pair 2`
    pub summary: String<MAX_SUMMARY_LEN>,
    /// Stage description with technique and pattern
    pub detail: String<MAX_DETAIL_LEN>,
    /// Stage reached after the step
    pub stage: Stage,
    /// Turns, not counting bare reorientations
    pub move_count: usize,
    /// Milestone or recognized algorithm
    pub technique: Option<Technique>,
    /// Catalogue entries found in the moves
    pub patterns: Vec<&'static Pattern, PATTERN_COUNT>,
    /// Difficulty tier
    pub complexity: Complexity,
    /// Share of the solve done after this step, in percent
    pub progress: u8,
    pub is_first: bool,
    pub is_last: bool,
    /// Moves contain a reorientation letter
    pub has_rotation: bool,
}

impl StepRecord {
    /// Stage heading shown above the step
    pub fn caption(&self) -> &'static str {
        self.stage.caption()
    }

    /// Study tips of the recognized patterns
    pub fn tips(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.tip)
    }
}

/// Classify one step
pub fn analyze_step(moves: &str, ctx: &StepContext) -> StepRecord {
    let normalized: StepText = normalize(moves);
    let patterns = recognize(&normalized);

    let technique = Technique::from_diff(ctx.stage, &ctx.diff)
        .or_else(|| patterns.first().map(|&p| Technique::Pattern(p)));

    let move_count = count_turns(moves);
    let complexity = Complexity::from_score(Complexity::score(move_count, moves));

    let progress = if ctx.total == 0 {
        0
    } else {
        (((ctx.index + 1) * 100 + ctx.total / 2) / ctx.total).min(100) as u8
    };

    let mut text = StepText::new();
    for ch in moves.chars() {
        if text.push(ch).is_err() {
            warn!("step {=usize} move text truncated", ctx.index);
            break;
        }
    }

    StepRecord {
        moves: text,
        summary: summary(ctx, technique.as_ref()),
        detail: detail(ctx.stage, technique.as_ref(), patterns.first().copied()),
        stage: ctx.stage,
        move_count,
        technique,
        patterns,
        complexity,
        progress,
        is_first: ctx.index == 0,
        is_last: ctx.index + 1 == ctx.total,
        has_rotation: moves
            .chars()
            .any(|c| matches!(c, 'x' | 'y' | 'z' | 'X' | 'Y' | 'Z')),
    }
}

fn summary(ctx: &StepContext, technique: Option<&Technique>) -> String<MAX_SUMMARY_LEN> {
    let mut out = String::new();
    let _ = match ctx.stage {
        Stage::Cross => {
            // The edge this step placed, or the one it is setting up
            let edge = if ctx.diff.cross_change > 0 {
                ctx.counts.cross
            } else {
                ctx.counts.cross + 1
            };
            write!(out, "Cross - Edge {}", edge.min(4))
        }
        Stage::F2l => {
            let pair = if ctx.diff.f2l_change.any() {
                ctx.counts.f2l
            } else {
                ctx.counts.f2l + 1
            };
            write!(out, "F2L Pair {}", pair.clamp(1, 4))
        }
        stage => match technique {
            Some(technique) => write!(out, "{}: {}", stage.label(), technique),
            None => out.push_str(stage.name()).map_err(|_| fmt::Error),
        },
    };
    out
}

fn detail(
    stage: Stage,
    technique: Option<&Technique>,
    pattern: Option<&'static Pattern>,
) -> String<MAX_DETAIL_LEN> {
    let mut out = String::new();
    if let Some(technique) = technique {
        let _ = write!(out, "Using {} technique. ", technique);
    }
    let _ = out.push_str(stage.description());
    if let Some(pattern) = pattern {
        let _ = write!(out, " Recognized pattern: {}.", pattern.name);
    }
    out
}
