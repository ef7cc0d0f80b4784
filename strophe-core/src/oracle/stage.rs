//! Solve stages

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::progress::Progress;

/// Layer-by-layer solve stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    /// Bottom cross edges
    Cross,
    /// First two layers
    F2l,
    /// Orient last layer
    Oll,
    /// Permute last layer
    Pll,
}

impl Stage {
    /// Stage reached by a snapshot
    ///
    /// The first incomplete milestone wins: cross, then all four F2L
    /// slots, then OLL. Anything beyond that is PLL.
    pub fn classify(progress: &Progress) -> Self {
        if !progress.cross_done() {
            Stage::Cross
        } else if !progress.f2l_done() {
            Stage::F2l
        } else if !progress.oll {
            Stage::Oll
        } else {
            Stage::Pll
        }
    }

    /// Upper-case label (`CROSS`, `F2L`, `OLL`, `PLL`)
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Cross => "CROSS",
            Stage::F2l => "F2L",
            Stage::Oll => "OLL",
            Stage::Pll => "PLL",
        }
    }

    /// Short display name
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Cross => "Cross",
            Stage::F2l => "F2L",
            Stage::Oll => "OLL",
            Stage::Pll => "PLL",
        }
    }

    /// One-line caption
    pub const fn caption(self) -> &'static str {
        match self {
            Stage::Cross => "Building the white cross",
            Stage::F2l => "First two layers",
            Stage::Oll => "Orient last layer",
            Stage::Pll => "Permute last layer",
        }
    }

    /// Sentence describing what a step in this stage does
    pub const fn description(self) -> &'static str {
        match self {
            Stage::Cross => "Solving a cross edge piece to build the white cross foundation.",
            Stage::F2l => "Pairing and inserting a corner-edge pair into the correct slot.",
            Stage::Oll => "Orienting the last layer pieces to make the top face yellow.",
            Stage::Pll => "Permuting the last layer pieces to their solved positions.",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
