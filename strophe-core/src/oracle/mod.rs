//! Progress oracle
//!
//! Pure predicates over a facelet snapshot (cross, first two layers,
//! orientation, permutation, full solve) and the stage they imply.

pub mod progress;
pub mod stage;

pub use progress::{F2lSlot, F2lStatus, Progress, ProgressDiff};
pub use stage::Stage;
