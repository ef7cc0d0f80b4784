//! Move engine
//!
//! Face turns (U D L R F B) and whole-cube reorientations (x y z). Every
//! move is defined once, as its clockwise quarter turn; prime and double
//! turns repeat it three and two times.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::color::Face;
use super::facelet::FaceletState;
use super::geometry::{strips, Cycle, E_PRIME_SLICE, M_PRIME_SLICE, S_SLICE};

/// Base letter of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveBase {
    U,
    D,
    L,
    R,
    F,
    B,
    /// Whole cube, following R
    X,
    /// Whole cube, following U
    Y,
    /// Whole cube, following F
    Z,
}

impl MoveBase {
    /// Parse a base letter (case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'U' => Some(MoveBase::U),
            'D' => Some(MoveBase::D),
            'L' => Some(MoveBase::L),
            'R' => Some(MoveBase::R),
            'F' => Some(MoveBase::F),
            'B' => Some(MoveBase::B),
            'X' => Some(MoveBase::X),
            'Y' => Some(MoveBase::Y),
            'Z' => Some(MoveBase::Z),
            _ => None,
        }
    }

    /// Notation letter (reorientations are written lowercase)
    pub const fn letter(self) -> char {
        match self {
            MoveBase::U => 'U',
            MoveBase::D => 'D',
            MoveBase::L => 'L',
            MoveBase::R => 'R',
            MoveBase::F => 'F',
            MoveBase::B => 'B',
            MoveBase::X => 'x',
            MoveBase::Y => 'y',
            MoveBase::Z => 'z',
        }
    }

    /// Face turned by this move, if it is a face turn
    pub const fn face(self) -> Option<Face> {
        match self {
            MoveBase::U => Some(Face::Up),
            MoveBase::D => Some(Face::Down),
            MoveBase::L => Some(Face::Left),
            MoveBase::R => Some(Face::Right),
            MoveBase::F => Some(Face::Front),
            MoveBase::B => Some(Face::Back),
            MoveBase::X | MoveBase::Y | MoveBase::Z => None,
        }
    }

    /// Check whether this is a whole-cube reorientation
    pub const fn is_rotation(self) -> bool {
        self.face().is_none()
    }
}

/// Turn amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Turn {
    /// Quarter turn clockwise (no suffix)
    #[default]
    Clockwise,
    /// Quarter turn counter-clockwise (`'`)
    Prime,
    /// Half turn (`2`)
    Double,
}

impl Turn {
    /// Number of clockwise quarter turns this amount stands for
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Prime => 3,
            Turn::Double => 2,
        }
    }

    /// Opposite direction
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::Prime,
            Turn::Prime => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    /// Notation suffix
    pub const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Prime => "'",
            Turn::Double => "2",
        }
    }
}

/// One parsed move, e.g. `R'`, `U2`, `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveToken {
    pub base: MoveBase,
    pub turn: Turn,
}

impl MoveToken {
    /// Create a token
    pub const fn new(base: MoveBase, turn: Turn) -> Self {
        Self { base, turn }
    }

    /// Parse one token
    ///
    /// The first character selects the base (case-insensitive). A `'`
    /// anywhere in the suffix makes it a prime turn, otherwise a `2` makes
    /// it a half turn. Other suffix characters (such as the `w` of a wide
    /// move) are ignored. Returns `None` for an empty token or an
    /// unrecognized base letter.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let base = MoveBase::from_letter(chars.next()?)?;
        let suffix = chars.as_str();

        let turn = if suffix.contains('\'') {
            Turn::Prime
        } else if suffix.contains('2') {
            Turn::Double
        } else {
            Turn::Clockwise
        };

        Some(Self { base, turn })
    }

    /// The move that undoes this one
    pub const fn inverse(self) -> Self {
        Self {
            base: self.base,
            turn: self.turn.inverse(),
        }
    }

    /// Check whether this is a whole-cube reorientation
    pub const fn is_rotation(self) -> bool {
        self.base.is_rotation()
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base.letter(), self.turn.suffix())
    }
}

impl FaceletState {
    /// Apply one move in place
    pub fn apply_move(&mut self, token: MoveToken) {
        for _ in 0..token.turn.quarter_turns() {
            self.quarter_turn(token.base);
        }
    }

    /// Apply one clockwise quarter turn of `base`
    fn quarter_turn(&mut self, base: MoveBase) {
        match base {
            MoveBase::U => self.turn_face(Face::Up),
            MoveBase::D => self.turn_face(Face::Down),
            MoveBase::L => self.turn_face(Face::Left),
            MoveBase::R => self.turn_face(Face::Right),
            MoveBase::F => self.turn_face(Face::Front),
            MoveBase::B => self.turn_face(Face::Back),
            // x = R L' M'
            MoveBase::X => self.reorient(Face::Right, Face::Left, &M_PRIME_SLICE),
            // y = U D' E'
            MoveBase::Y => self.reorient(Face::Up, Face::Down, &E_PRIME_SLICE),
            // z = F B' S
            MoveBase::Z => self.reorient(Face::Front, Face::Back, &S_SLICE),
        }
    }

    /// Clockwise face turn: own facelets plus the four adjacent strips
    fn turn_face(&mut self, face: Face) {
        self.rotate_face(face);
        for cycle in strips(face) {
            self.cycle(cycle);
        }
    }

    /// Whole-cube rotation following `leading`
    ///
    /// Turns `leading` clockwise, `opposite` counter-clockwise, and carries
    /// the middle layer between them along with `slice`.
    fn reorient(&mut self, leading: Face, opposite: Face, slice: &[Cycle; 3]) {
        self.turn_face(leading);
        for _ in 0..3 {
            self.turn_face(opposite);
        }
        for cycle in slice {
            self.cycle(cycle);
        }
    }
}
