//! Sticker colors and cube faces

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Facelets per face
pub const FACE_SIZE: usize = 9;

/// Offset of the center facelet within a face
pub const CENTER: usize = 4;

/// Sticker color
///
/// Only equality matters to the move engine and the oracle; the letters
/// are the ones the scan and solve services exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    /// All colors, in solved face order (U, R, F, D, L, B)
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// Single-letter code
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }

    /// Parse a single-letter code (case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'Y' => Some(Color::Yellow),
            'O' => Some(Color::Orange),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Blue => "Blue",
        }
    }
}

/// Cube face, in canonical storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    /// All faces in storage order
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Position of this face in storage order
    pub const fn index(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Right => 1,
            Face::Front => 2,
            Face::Down => 3,
            Face::Left => 4,
            Face::Back => 5,
        }
    }

    /// Index of this face's first facelet
    pub const fn base(self) -> usize {
        self.index() * FACE_SIZE
    }

    /// Index of this face's center facelet
    pub const fn center(self) -> usize {
        self.base() + CENTER
    }

    /// Color of this face on a freshly constructed cube
    pub const fn solved_color(self) -> Color {
        Color::ALL[self.index()]
    }

    /// Face that must point up while this face is read row-major
    pub const fn reading_top(self) -> Face {
        match self {
            Face::Up => Face::Back,
            Face::Down => Face::Front,
            _ => Face::Up,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Right => "Right",
            Face::Front => "Front",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Back => "Back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
        }
        assert_eq!(Color::from_letter('g'), Some(Color::Green));
        assert_eq!(Color::from_letter('?'), None);
    }

    #[test]
    fn test_face_layout() {
        assert_eq!(Face::Up.base(), 0);
        assert_eq!(Face::Down.base(), 27);
        assert_eq!(Face::Back.center(), 49);
        assert_eq!(Face::Front.solved_color(), Color::Green);
        assert_eq!(Face::Left.solved_color(), Color::Orange);
    }

    #[test]
    fn test_reading_top() {
        assert_eq!(Face::Front.reading_top(), Face::Up);
        assert_eq!(Face::Up.reading_top(), Face::Back);
        assert_eq!(Face::Down.reading_top(), Face::Front);
    }
}
