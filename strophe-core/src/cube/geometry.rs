//! Facelet index cycles
//!
//! Every move is a composition of 4-cycles over the 54 facelet indices.
//! A cycle `[a, b, c, d]` carries the sticker at `a` to `b`, `b` to `c`,
//! `c` to `d` and `d` back to `a`.
//!
//! Facelet layout (Kociemba order, each face read row-major):
//! ```text
//!              ┌──────────┐
//!              │  0  1  2 │
//!              │  3  U  5 │
//!              │  6  7  8 │
//! ┌──────────┬─┴──────────┴─┬──────────┬──────────┐
//! │ 36 37 38 │ 18 19 20     │  9 10 11 │ 45 46 47 │
//! │ 39  L 41 │ 21  F 23     │ 12  R 14 │ 48  B 50 │
//! │ 42 43 44 │ 24 25 26     │ 15 16 17 │ 51 52 53 │
//! └──────────┴─┬──────────┬─┴──────────┴──────────┘
//!              │ 27 28 29 │
//!              │ 30  D 32 │
//!              │ 33 34 35 │
//!              └──────────┘
//! ```

use super::color::Face;

/// One 4-cycle of facelet indices
pub type Cycle = [usize; 4];

/// Corner cycle of a clockwise face rotation, relative to the face base
pub const FACE_CORNERS: Cycle = [0, 2, 8, 6];

/// Edge cycle of a clockwise face rotation, relative to the face base
pub const FACE_EDGES: Cycle = [1, 5, 7, 3];

/// U: F top row → L → B → R → F
pub const U_STRIPS: [Cycle; 3] = [[18, 36, 45, 9], [19, 37, 46, 10], [20, 38, 47, 11]];

/// R: F right column → U → B left column → D → F
pub const R_STRIPS: [Cycle; 3] = [[20, 2, 51, 29], [23, 5, 48, 32], [26, 8, 45, 35]];

/// F: U bottom row → R left column → D top row → L right column → U
pub const F_STRIPS: [Cycle; 3] = [[6, 9, 29, 44], [7, 12, 28, 41], [8, 15, 27, 38]];

/// D: F bottom row → R → B → L → F
pub const D_STRIPS: [Cycle; 3] = [[24, 15, 51, 42], [25, 16, 52, 43], [26, 17, 53, 44]];

/// L: U left column → F → D → B right column → U
pub const L_STRIPS: [Cycle; 3] = [[0, 18, 27, 53], [3, 21, 30, 50], [6, 24, 33, 47]];

/// B: U top row → L left column → D bottom row → R right column → U
pub const B_STRIPS: [Cycle; 3] = [[2, 36, 33, 17], [1, 39, 34, 14], [0, 42, 35, 11]];

/// Middle slice turned with R (carried by `x`)
pub const M_PRIME_SLICE: [Cycle; 3] = [[19, 1, 52, 28], [22, 4, 49, 31], [25, 7, 46, 34]];

/// Equatorial slice turned with U (carried by `y`)
pub const E_PRIME_SLICE: [Cycle; 3] = [[21, 39, 48, 12], [22, 40, 49, 13], [23, 41, 50, 14]];

/// Standing slice turned with F (carried by `z`)
pub const S_SLICE: [Cycle; 3] = [[3, 10, 32, 43], [4, 13, 31, 40], [5, 16, 30, 37]];

/// Adjacent-strip cycles for a clockwise turn of `face`
pub const fn strips(face: Face) -> &'static [Cycle; 3] {
    match face {
        Face::Up => &U_STRIPS,
        Face::Right => &R_STRIPS,
        Face::Front => &F_STRIPS,
        Face::Down => &D_STRIPS,
        Face::Left => &L_STRIPS,
        Face::Back => &B_STRIPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::FACELET_COUNT;

    fn all_cycles() -> impl Iterator<Item = &'static Cycle> {
        Face::ALL
            .iter()
            .flat_map(|&face| strips(face).iter())
            .chain(M_PRIME_SLICE.iter())
            .chain(E_PRIME_SLICE.iter())
            .chain(S_SLICE.iter())
    }

    #[test]
    fn test_cycles_in_range_and_distinct() {
        for cycle in all_cycles() {
            for (i, &a) in cycle.iter().enumerate() {
                assert!(a < FACELET_COUNT);
                for &b in &cycle[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_strips_touch_four_other_faces() {
        for face in Face::ALL {
            for cycle in strips(face) {
                for &index in cycle {
                    assert_ne!(index / 9, face.index(), "{:?} strip touches itself", face);
                }
            }
        }
    }

    #[test]
    fn test_slices_skip_corners() {
        for cycle in M_PRIME_SLICE.iter().chain(&E_PRIME_SLICE).chain(&S_SLICE) {
            for &index in cycle {
                let offset = index % 9;
                assert!(!FACE_CORNERS.contains(&offset));
            }
        }
    }
}
