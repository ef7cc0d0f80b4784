//! Step analyzer
//!
//! Classifies each move-group of a solution using the progress diff it
//! produced and a small catalogue of named algorithms.

pub mod catalogue;
pub mod step;

pub use catalogue::{normalize, recognize, Pattern, PATTERNS, PATTERN_COUNT};
pub use step::{
    analyze_step, Complexity, StepContext, StepCounts, StepRecord, StepText, Technique,
    MAX_DETAIL_LEN, MAX_STEP_LEN, MAX_SUMMARY_LEN,
};
