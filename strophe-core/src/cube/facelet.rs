//! Facelet state
//!
//! The single source of truth for the cube configuration: 54 sticker
//! colors, six contiguous faces of nine in U, R, F, D, L, B order.

use super::color::{Color, Face, FACE_SIZE};
use super::geometry::{Cycle, FACE_CORNERS, FACE_EDGES};

/// Facelets on the whole cube
pub const FACELET_COUNT: usize = 6 * FACE_SIZE;

/// Cube configuration as 54 sticker colors
///
/// The array length is fixed by the type; the only mutation is a cyclic
/// reassignment of colors among a fixed set of indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceletState {
    facelets: [Color; FACELET_COUNT],
}

impl Default for FaceletState {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceletState {
    /// Create a solved cube
    pub fn new() -> Self {
        let mut facelets = [Color::White; FACELET_COUNT];
        for face in Face::ALL {
            let base = face.base();
            facelets[base..base + FACE_SIZE].fill(face.solved_color());
        }
        Self { facelets }
    }

    /// Color at a facelet index, or None if out of range
    pub fn get(&self, index: usize) -> Option<Color> {
        self.facelets.get(index).copied()
    }

    /// All 54 facelets
    pub fn facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }

    /// The nine facelets of one face
    pub fn face(&self, face: Face) -> &[Color] {
        let base = face.base();
        &self.facelets[base..base + FACE_SIZE]
    }

    /// Current center color of a face
    pub fn center(&self, face: Face) -> Color {
        self.facelets[face.center()]
    }

    /// Check whether every facelet of `face` matches its own center
    pub fn is_face_uniform(&self, face: Face) -> bool {
        let center = self.center(face);
        self.face(face).iter().all(|&c| c == center)
    }

    /// Check whether the facelet at `index` matches the center of `face`
    pub(crate) fn matches_center(&self, index: usize, face: Face) -> bool {
        self.facelets[index] == self.center(face)
    }

    /// Render as 54 color letters in storage order
    pub fn letters(&self) -> heapless::String<FACELET_COUNT> {
        let mut out = heapless::String::new();
        for color in self.facelets {
            // One ASCII letter per facelet
            let _ = out.push(color.letter());
        }
        out
    }

    /// Carry the sticker at `cycle[0]` to `cycle[1]`, and so on around
    pub(crate) fn cycle(&mut self, cycle: &Cycle) {
        let last = self.facelets[cycle[3]];
        self.facelets[cycle[3]] = self.facelets[cycle[2]];
        self.facelets[cycle[2]] = self.facelets[cycle[1]];
        self.facelets[cycle[1]] = self.facelets[cycle[0]];
        self.facelets[cycle[0]] = last;
    }

    /// Rotate the nine facelets of `face` a quarter turn clockwise
    pub(crate) fn rotate_face(&mut self, face: Face) {
        let base = face.base();
        self.cycle(&FACE_CORNERS.map(|offset| base + offset));
        self.cycle(&FACE_EDGES.map(|offset| base + offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_solved_layout() {
        let state = FaceletState::new();
        for face in Face::ALL {
            assert!(state.is_face_uniform(face));
            assert_eq!(state.center(face), face.solved_color());
        }
        assert_eq!(state.get(27), Some(Color::Yellow));
        assert_eq!(state.get(FACELET_COUNT), None);
    }

    #[test]
    fn test_letters() {
        let letters = FaceletState::new().letters();
        assert_eq!(letters.len(), FACELET_COUNT);
        assert!(letters.starts_with("WWWWWWWWWRRRRRRRRRGGGGGGGGG"));
    }

    #[test]
    fn test_cycle_moves_stickers_forward() {
        let mut state = FaceletState::new();
        // 0 (W) → 9, 9 (R) → 18, 18 (G) → 27, 27 (Y) → 0
        state.cycle(&[0, 9, 18, 27]);
        assert_eq!(state.get(9), Some(Color::White));
        assert_eq!(state.get(18), Some(Color::Red));
        assert_eq!(state.get(27), Some(Color::Green));
        assert_eq!(state.get(0), Some(Color::Yellow));
    }

    #[test]
    fn test_rotate_face_keeps_uniform_face() {
        let mut state = FaceletState::new();
        state.rotate_face(Face::Front);
        assert_eq!(state, FaceletState::new());
    }
}
