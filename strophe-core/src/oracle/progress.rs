//! Solve progress predicates
//!
//! Every check compares facelets against the current center of the face
//! they sit on, never against a fixed color, so reorientations do not
//! confuse the oracle. Down is always the bottom face.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cube::{Face, FaceletState};

/// Facelet index paired with the face whose center it must match
type Sticker = (usize, Face);

/// The four bottom cross edges: Down sticker, then side sticker
const CROSS_EDGES: [[Sticker; 2]; 4] = [
    [(28, Face::Down), (25, Face::Front)],
    [(30, Face::Down), (43, Face::Left)],
    [(32, Face::Down), (16, Face::Right)],
    [(34, Face::Down), (52, Face::Back)],
];

/// First-two-layers slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum F2lSlot {
    FrontRight,
    FrontLeft,
    BackLeft,
    BackRight,
}

impl F2lSlot {
    /// All slots, in reporting order
    pub const ALL: [F2lSlot; 4] = [
        F2lSlot::FrontRight,
        F2lSlot::FrontLeft,
        F2lSlot::BackLeft,
        F2lSlot::BackRight,
    ];

    const fn index(self) -> usize {
        match self {
            F2lSlot::FrontRight => 0,
            F2lSlot::FrontLeft => 1,
            F2lSlot::BackLeft => 2,
            F2lSlot::BackRight => 3,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            F2lSlot::FrontRight => "Front-Right",
            F2lSlot::FrontLeft => "Front-Left",
            F2lSlot::BackLeft => "Back-Left",
            F2lSlot::BackRight => "Back-Right",
        }
    }

    /// Corner (three stickers) then edge (two stickers)
    const fn stickers(self) -> [Sticker; 5] {
        match self {
            F2lSlot::FrontRight => [
                (26, Face::Front),
                (15, Face::Right),
                (29, Face::Down),
                (23, Face::Front),
                (12, Face::Right),
            ],
            F2lSlot::FrontLeft => [
                (24, Face::Front),
                (44, Face::Left),
                (27, Face::Down),
                (21, Face::Front),
                (41, Face::Left),
            ],
            F2lSlot::BackLeft => [
                (53, Face::Back),
                (42, Face::Left),
                (33, Face::Down),
                (50, Face::Back),
                (39, Face::Left),
            ],
            F2lSlot::BackRight => [
                (51, Face::Back),
                (17, Face::Right),
                (35, Face::Down),
                (48, Face::Back),
                (14, Face::Right),
            ],
        }
    }
}

/// Per-slot F2L completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct F2lStatus {
    slots: [bool; 4],
}

impl F2lStatus {
    /// Check whether `slot` is complete
    pub const fn get(&self, slot: F2lSlot) -> bool {
        self.slots[slot.index()]
    }

    /// Number of complete slots
    pub fn count(&self) -> u8 {
        self.slots.iter().filter(|&&done| done).count() as u8
    }

    /// Check whether all four slots are complete
    pub fn all(&self) -> bool {
        self.slots.iter().all(|&done| done)
    }

    /// Check whether any slot is complete
    pub fn any(&self) -> bool {
        self.slots.iter().any(|&done| done)
    }

    /// Slots complete in `self` but not in `before`
    pub fn newly_completed(&self, before: &F2lStatus) -> F2lStatus {
        let mut slots = [false; 4];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = self.slots[i] && !before.slots[i];
        }
        F2lStatus { slots }
    }

    /// Complete slots, in reporting order
    pub fn completed(&self) -> impl Iterator<Item = F2lSlot> + '_ {
        F2lSlot::ALL.into_iter().filter(|&slot| self.get(slot))
    }
}

impl FaceletState {
    fn sticker_ok(&self, (index, face): Sticker) -> bool {
        self.matches_center(index, face)
    }

    /// Number of bottom cross edges in place (0 to 4)
    pub fn cross_count(&self) -> u8 {
        CROSS_EDGES
            .iter()
            .filter(|edge| edge.iter().all(|&s| self.sticker_ok(s)))
            .count() as u8
    }

    /// Check whether all four bottom cross edges are in place
    pub fn cross_solved(&self) -> bool {
        self.cross_count() == 4
    }

    /// Completion of each F2L slot
    pub fn f2l_status(&self) -> F2lStatus {
        let mut status = F2lStatus::default();
        for slot in F2lSlot::ALL {
            status.slots[slot.index()] = slot.stickers().iter().all(|&s| self.sticker_ok(s));
        }
        status
    }

    /// Check whether the cross and all four F2L slots are complete
    pub fn f2l_solved(&self) -> bool {
        self.cross_solved() && self.f2l_status().all()
    }

    /// Check whether the Up face is a single color
    pub fn oll_solved(&self) -> bool {
        self.is_face_uniform(Face::Up)
    }

    /// Check whether OLL holds and the four side faces are each uniform
    pub fn pll_solved(&self) -> bool {
        self.oll_solved()
            && [Face::Right, Face::Front, Face::Back, Face::Left]
                .iter()
                .all(|&face| self.is_face_uniform(face))
    }

    /// Check whether all six faces are uniform
    pub fn fully_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| self.is_face_uniform(face))
    }
}

/// Oracle counters for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Progress {
    /// Cross edges in place (0 to 4)
    pub cross_count: u8,
    /// F2L slot completion
    pub f2l: F2lStatus,
    /// Up face uniform
    pub oll: bool,
    /// Up and side faces uniform
    pub pll: bool,
    /// Every face uniform
    pub solved: bool,
}

impl Progress {
    /// Evaluate every predicate on `state`
    pub fn of(state: &FaceletState) -> Self {
        Self {
            cross_count: state.cross_count(),
            f2l: state.f2l_status(),
            oll: state.oll_solved(),
            pll: state.pll_solved(),
            solved: state.fully_solved(),
        }
    }

    /// All four cross edges in place
    pub const fn cross_done(&self) -> bool {
        self.cross_count == 4
    }

    /// All four F2L slots complete
    pub fn f2l_done(&self) -> bool {
        self.f2l.all()
    }
}

/// Change in oracle counters across one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgressDiff {
    /// Cross edges gained (negative when edges were broken)
    pub cross_change: i8,
    /// Slots complete after the step but not before it
    pub f2l_change: F2lStatus,
    /// OLL became solved during the step
    pub oll_solved: bool,
    /// PLL became solved during the step
    pub pll_solved: bool,
    /// Cross complete after the step
    pub cross_done: bool,
    /// All F2L slots complete after the step
    pub f2l_done: bool,
}

impl ProgressDiff {
    /// Compare two snapshots
    pub fn between(before: &Progress, after: &Progress) -> Self {
        Self {
            cross_change: after.cross_count as i8 - before.cross_count as i8,
            f2l_change: after.f2l.newly_completed(&before.f2l),
            oll_solved: after.oll && !before.oll,
            pll_solved: after.pll && !before.pll,
            cross_done: after.cross_done(),
            f2l_done: after.f2l_done(),
        }
    }

    /// Check whether the step changed any counter worth reporting
    pub fn is_physical_change(&self) -> bool {
        self.cross_change > 0 || self.f2l_change.any() || self.oll_solved || self.pll_solved
    }
}
