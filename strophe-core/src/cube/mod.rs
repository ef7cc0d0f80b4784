//! Facelet cube model and move engine
//!
//! The cube is nothing more than 54 sticker colors. Moves are fixed
//! permutations of facelet indices; there is no piece or geometry model.

pub mod color;
pub mod facelet;
pub mod geometry;
pub mod moves;
pub mod notation;

pub use color::{Color, Face, CENTER, FACE_SIZE};
pub use facelet::{FaceletState, FACELET_COUNT};
pub use moves::{MoveBase, MoveToken, Turn};
pub use notation::{
    append_moves, count_turns, invert_moves, is_rotation_token, tokens, AlgString,
    NotationError, MAX_ALG_LEN,
};
