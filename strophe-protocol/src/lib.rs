//! Service records for the cube scanner and solver
//!
//! This crate defines the records exchanged with the two external
//! collaborators of the playback engine:
//!
//! - The face-scan service, which labels the nine stickers of one face
//!   from a photo and reports the center it detected
//! - The solve service, which receives the full six-face description and
//!   returns a whitespace-separated move string
//!
//! # Cube description
//!
//! Faces are described by nine color letters each, read row-major:
//! ```text
//! ┌───┬───┬───┐
//! │ 0 │ 1 │ 2 │
//! ├───┼───┼───┤
//! │ 3 │ 4 │ 5 │   4 = center
//! ├───┼───┼───┤
//! │ 6 │ 7 │ 8 │
//! └───┴───┴───┘
//! ```
//! The full description concatenates the faces in U, R, F, D, L, B order
//! into a single 54-character string.
//!
//! No transport lives here: the host decides how records travel.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod scan;
pub mod solve;

pub use error::{DescriptionError, ServiceError};
pub use scan::{FaceScan, FaceScanReply, FACE_TILES};
pub use solve::{
    validate_description, SolveReply, SolveRequest, DESCRIPTION_LEN, MAX_SOLUTION_LEN,
};

/// Maximum length of a human-readable service message
pub const MAX_MESSAGE_LEN: usize = 96;

/// Human-readable message carried by failure records
pub type Message = heapless::String<MAX_MESSAGE_LEN>;

/// Build a message, truncating at a character boundary if it does not fit
pub fn message(text: &str) -> Message {
    let mut out = Message::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_fits() {
        assert_eq!(message("Invalid center color selected.").as_str(), "Invalid center color selected.");
    }

    #[test]
    fn test_message_truncates() {
        let bytes = [b'x'; MAX_MESSAGE_LEN + 20];
        let long = core::str::from_utf8(&bytes).unwrap();
        assert_eq!(message(long).len(), MAX_MESSAGE_LEN);
    }
}
