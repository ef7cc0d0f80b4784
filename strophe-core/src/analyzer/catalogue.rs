//! Known short algorithms
//!
//! Matched as substrings of a step's normalized move text, in catalogue
//! order.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A named algorithm with a study tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Pattern {
    /// Display name
    pub name: &'static str,
    /// Upper-case move text, single spaces
    pub moves: &'static str,
    /// One-line study tip
    pub tip: &'static str,
}

/// Catalogue size
pub const PATTERN_COUNT: usize = 9;

/// Every known pattern
pub static PATTERNS: [Pattern; PATTERN_COUNT] = [
    Pattern {
        name: "Sexy Move",
        moves: "R U R' U'",
        tip: "The most fundamental trigger",
    },
    Pattern {
        name: "Inverse Sexy",
        moves: "U R U' R'",
        tip: "Reverse of sexy move",
    },
    Pattern {
        name: "Sledgehammer",
        moves: "R' F R F'",
        tip: "Corner manipulation",
    },
    Pattern {
        name: "Sune",
        moves: "R U R' U R U2 R'",
        tip: "Common OLL algorithm",
    },
    Pattern {
        name: "Anti-Sune",
        moves: "R' U' R U' R' U2 R",
        tip: "Mirror of Sune",
    },
    Pattern {
        name: "OLL Cross",
        moves: "F R U R' U' F'",
        tip: "Creates yellow cross",
    },
    Pattern {
        name: "T-Perm",
        moves: "R U R' U' R' F R2 U' R' U' R U R' F'",
        tip: "Headlights on left",
    },
    Pattern {
        name: "Right Insert",
        moves: "R U R'",
        tip: "Basic F2L insertion",
    },
    Pattern {
        name: "Left Insert",
        moves: "L' U' L",
        tip: "Basic F2L insertion",
    },
];

/// Upper-case `text` and collapse every whitespace run into one space
pub fn normalize<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for token in text.split_whitespace() {
        if !out.is_empty() && out.push(' ').is_err() {
            break;
        }
        for ch in token.chars() {
            if out.push(ch.to_ascii_uppercase()).is_err() {
                return out;
            }
        }
    }
    out
}

/// Catalogue entries contained in already-normalized move text
pub fn recognize(normalized: &str) -> Vec<&'static Pattern, PATTERN_COUNT> {
    let mut found = Vec::new();
    for pattern in PATTERNS.iter() {
        if normalized.contains(pattern.moves) {
            // Capacity equals catalogue size
            let _ = found.push(pattern);
        }
    }
    found
}
