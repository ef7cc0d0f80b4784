//! Cube model and solve playback logic
//!
//! This crate contains everything that does not depend on a renderer,
//! camera or network:
//!
//! - Facelet cube model and move engine
//! - Progress oracle (cross, F2L, OLL, PLL, solved)
//! - Step analyzer
//! - Playback timeline and breakpoint acquisition
//! - Replay log and face scan session
//! - Collaborator traits and configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod analyzer;
pub mod config;
pub mod cube;
pub mod oracle;
pub mod replay;
pub mod scan;
pub mod timeline;
pub mod traits;

pub use cube::{Color, Face, FaceletState, MoveToken};
pub use oracle::{Progress, ProgressDiff, Stage};
pub use replay::SolveScript;
pub use timeline::{Intent, TimelineEvent, TimelineScheduler, MAX_STEPS};
