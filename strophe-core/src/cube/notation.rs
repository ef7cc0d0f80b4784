//! Move notation
//!
//! Algorithms are whitespace-separated tokens. Tokens that do not parse are
//! skipped rather than rejected, so display text with stray symbols still
//! plays back.

use core::fmt;

use heapless::String;

use super::facelet::FaceletState;
use super::moves::MoveToken;
use crate::analyzer::MAX_STEP_LEN;
use crate::timeline::MAX_STEPS;

/// Maximum length of a flattened algorithm in bytes
///
/// Sized for the inverse of a full script: inverting can add one `'` per
/// token, so each group of up to `MAX_STEP_LEN` bytes grows by at most
/// half, plus one separating space.
pub const MAX_ALG_LEN: usize = MAX_STEPS * (MAX_STEP_LEN * 3 / 2 + 1);

/// Owned algorithm text
pub type AlgString = String<MAX_ALG_LEN>;

/// Notation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotationError {
    /// Output would exceed the algorithm capacity
    TooLong,
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::TooLong => {
                write!(f, "algorithm exceeds {} bytes", MAX_ALG_LEN)
            }
        }
    }
}

/// Split algorithm text into raw tokens
pub fn tokens(text: &str) -> impl DoubleEndedIterator<Item = &str> {
    text.split_whitespace()
}

/// Check whether a raw token is a bare reorientation (`x`, `Y'`, `z2`, ...)
pub fn is_rotation_token(token: &str) -> bool {
    let mut chars = token.chars();
    let base = matches!(chars.next(), Some('x' | 'y' | 'z' | 'X' | 'Y' | 'Z'));
    base && chars.all(|c| c == '\'' || c == '2')
}

/// Count the tokens of `text` that are not bare reorientations
pub fn count_turns(text: &str) -> usize {
    tokens(text).filter(|t| !is_rotation_token(t)).count()
}

/// Invert an algorithm
///
/// Reverses token order. A token carrying `'` loses it; any other token
/// gains one unless it carries a `2`. Blank input inverts to an empty string.
pub fn invert_moves(text: &str) -> Result<AlgString, NotationError> {
    let mut out = AlgString::new();

    for (i, token) in tokens(text).rev().enumerate() {
        if i > 0 {
            out.push(' ').map_err(|_| NotationError::TooLong)?;
        }
        if token.contains('\'') {
            for ch in token.chars().filter(|&c| c != '\'') {
                out.push(ch).map_err(|_| NotationError::TooLong)?;
            }
        } else {
            out.push_str(token).map_err(|_| NotationError::TooLong)?;
            if !token.contains('2') {
                out.push('\'').map_err(|_| NotationError::TooLong)?;
            }
        }
    }

    Ok(out)
}

/// Append `piece` to `out`, separated by one space when `out` is non-empty
pub fn append_moves<const N: usize>(out: &mut String<N>, piece: &str) -> Result<(), NotationError> {
    for token in tokens(piece) {
        if !out.is_empty() {
            out.push(' ').map_err(|_| NotationError::TooLong)?;
        }
        out.push_str(token).map_err(|_| NotationError::TooLong)?;
    }
    Ok(())
}

impl FaceletState {
    /// Apply every recognized token of `text`, in order
    pub fn apply_algorithm(&mut self, text: &str) {
        for token in tokens(text) {
            match MoveToken::parse(token) {
                Some(token) => self.apply_move(token),
                None => debug!("skipping token {=str}", token),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_invert_simple() {
        assert_eq!(invert_moves("R U R' U'").unwrap().as_str(), "U R U' R'");
        assert_eq!(invert_moves("R2 x' F").unwrap().as_str(), "F' x R2");
    }

    #[test]
    fn test_invert_blank() {
        assert_eq!(invert_moves("").unwrap().as_str(), "");
        assert_eq!(invert_moves("   ").unwrap().as_str(), "");
    }

    #[test]
    fn test_invert_collapses_whitespace() {
        assert_eq!(invert_moves("  R   U2\tF ").unwrap().as_str(), "F' U2 R'");
    }

    #[test]
    fn test_invert_too_long() {
        let mut text: String<16384> = String::new();
        for _ in 0..2500 {
            text.push_str("R U ").unwrap();
        }
        assert_eq!(invert_moves(&text), Err(NotationError::TooLong));
    }

    #[test]
    fn test_rotation_tokens() {
        assert!(is_rotation_token("x"));
        assert!(is_rotation_token("Y'"));
        assert!(is_rotation_token("z2"));
        assert!(!is_rotation_token("R"));
        assert!(!is_rotation_token("xw"));
        assert_eq!(count_turns("x R U R' y' U'"), 4);
    }

    #[test]
    fn test_unknown_tokens_skipped() {
        let mut a = FaceletState::new();
        a.apply_algorithm("R ?? U  M T2 R'");
        let mut b = FaceletState::new();
        b.apply_algorithm("R U R'");
        assert_eq!(a, b);
    }

    #[test]
    fn test_append_moves() {
        let mut out: String<32> = String::new();
        append_moves(&mut out, "R U").unwrap();
        append_moves(&mut out, "  ").unwrap();
        append_moves(&mut out, "F'").unwrap();
        assert_eq!(out.as_str(), "R U F'");
    }

    fn move_text() -> impl Strategy<Value = std::string::String> {
        let token = (
            prop::sample::select(&['U', 'D', 'L', 'R', 'F', 'B', 'x', 'y', 'z'][..]),
            prop::sample::select(&["", "'", "2"][..]),
        )
            .prop_map(|(base, suffix)| std::format!("{}{}", base, suffix));
        prop::collection::vec(token, 0..40).prop_map(|tokens| tokens.join(" "))
    }

    proptest! {
        #[test]
        fn prop_four_quarter_turns_are_identity(
            scramble in move_text(),
            base in prop::sample::select(&["U", "D", "L", "R", "F", "B", "x", "y", "z"][..]),
        ) {
            let mut state = FaceletState::new();
            state.apply_algorithm(&scramble);
            let before = state;
            for _ in 0..4 {
                state.apply_algorithm(base);
            }
            prop_assert_eq!(state, before);
        }

        #[test]
        fn prop_invert_is_involution(text in move_text()) {
            let once = invert_moves(&text).unwrap();
            let twice = invert_moves(&once).unwrap();
            prop_assert_eq!(twice.as_str(), text.as_str());
        }

        #[test]
        fn prop_algorithm_then_inverse_is_identity(text in move_text()) {
            let mut state = FaceletState::new();
            state.apply_algorithm(&text);
            state.apply_algorithm(&invert_moves(&text).unwrap());
            prop_assert_eq!(state, FaceletState::new());
        }
    }
}
