//! Solve service records
//!
//! The solve service receives all six faces and answers with a single
//! move string, e.g. `"U F L2 D R B2 D' L'"`.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DescriptionError, ServiceError};
use crate::scan::FACE_TILES;
use crate::{message, Message};

/// Length of a full cube description (6 faces × 9 tiles)
pub const DESCRIPTION_LEN: usize = 6 * FACE_TILES;

/// Maximum length of a returned solution
pub const MAX_SOLUTION_LEN: usize = 512;

/// One face as nine color letters
pub type FaceString = String<FACE_TILES>;

/// Validate a 54-character cube description
///
/// The description must be exactly 54 characters, each an uppercase ASCII
/// letter. Whether the letters form a solvable cube is the solver's concern.
pub fn validate_description(description: &str) -> Result<(), DescriptionError> {
    let len = description.chars().count();
    if len != DESCRIPTION_LEN {
        return Err(DescriptionError::WrongLength(len));
    }

    for (index, ch) in description.chars().enumerate() {
        if !ch.is_ascii_uppercase() {
            return Err(DescriptionError::InvalidCharacter { index, ch });
        }
    }

    Ok(())
}

/// Request to the solve service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveRequest {
    pub up: FaceString,
    pub right: FaceString,
    pub front: FaceString,
    pub down: FaceString,
    pub left: FaceString,
    pub back: FaceString,
}

impl SolveRequest {
    /// Build a request from six faces in U, R, F, D, L, B order
    pub fn from_faces(faces: &[[char; FACE_TILES]; 6]) -> Self {
        let face = |tiles: &[char; FACE_TILES]| {
            let mut out = FaceString::new();
            for &tile in tiles {
                // Capacity is FACE_TILES bytes; non-ASCII letters are
                // rejected later by validate()
                let _ = out.push(tile);
            }
            out
        };

        Self {
            up: face(&faces[0]),
            right: face(&faces[1]),
            front: face(&faces[2]),
            down: face(&faces[3]),
            left: face(&faces[4]),
            back: face(&faces[5]),
        }
    }

    /// Faces in U, R, F, D, L, B order
    pub fn faces(&self) -> [&str; 6] {
        [
            self.up.as_str(),
            self.right.as_str(),
            self.front.as_str(),
            self.down.as_str(),
            self.left.as_str(),
            self.back.as_str(),
        ]
    }

    /// Concatenate the faces into the 54-character description
    pub fn facelet_string(&self) -> String<DESCRIPTION_LEN> {
        let mut out = String::new();
        for face in self.faces() {
            // Each face holds at most FACE_TILES bytes
            let _ = out.push_str(face);
        }
        out
    }

    /// Validate the concatenated description
    pub fn validate(&self) -> Result<(), DescriptionError> {
        validate_description(&self.facelet_string())
    }
}

/// Raw reply from the solve service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveReply {
    /// Whether a solution was found
    pub ok: bool,
    /// Whitespace-separated move string (success only)
    pub solution: Option<String<MAX_SOLUTION_LEN>>,
    /// Human-readable reason (failure only)
    pub error: Option<Message>,
}

impl SolveReply {
    /// Create a success record
    ///
    /// Returns `None` if the solution exceeds `MAX_SOLUTION_LEN`.
    pub fn success(solution: &str) -> Option<Self> {
        let mut text = String::new();
        text.push_str(solution).ok()?;
        Some(Self {
            ok: true,
            solution: Some(text),
            error: None,
        })
    }

    /// Create a failure record
    pub fn failure(reason: &str) -> Self {
        Self {
            ok: false,
            solution: None,
            error: Some(message(reason)),
        }
    }

    /// Convert into the solution string
    ///
    /// An empty solution is valid: the cube was already solved.
    pub fn into_result(self) -> Result<String<MAX_SOLUTION_LEN>, ServiceError> {
        if !self.ok {
            let reason = self
                .error
                .unwrap_or_else(|| message("No solution could be found!"));
            return Err(ServiceError::Rejected(reason));
        }
        self.solution.ok_or(ServiceError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved_faces() -> [[char; 9]; 6] {
        [['W'; 9], ['R'; 9], ['G'; 9], ['Y'; 9], ['O'; 9], ['B'; 9]]
    }

    #[test]
    fn test_facelet_string_order() {
        let request = SolveRequest::from_faces(&solved_faces());
        let description = request.facelet_string();
        assert_eq!(description.len(), DESCRIPTION_LEN);
        assert!(description.starts_with("WWWWWWWWWRRRRRRRRR"));
        assert!(description.ends_with("OOOOOOOOOBBBBBBBBB"));
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_description_wrong_length() {
        assert_eq!(
            validate_description("WWW"),
            Err(DescriptionError::WrongLength(3))
        );
    }

    #[test]
    fn test_description_invalid_character() {
        let mut faces = solved_faces();
        faces[2][4] = '?';
        let request = SolveRequest::from_faces(&faces);
        assert_eq!(
            request.validate(),
            Err(DescriptionError::InvalidCharacter { index: 22, ch: '?' })
        );
    }

    #[test]
    fn test_description_lowercase_rejected() {
        let mut faces = solved_faces();
        faces[0][0] = 'w';
        let request = SolveRequest::from_faces(&faces);
        assert!(matches!(
            request.validate(),
            Err(DescriptionError::InvalidCharacter { index: 0, .. })
        ));
    }

    #[test]
    fn test_reply_success() {
        let reply = SolveReply::success("U F L2 D R B2").unwrap();
        assert_eq!(reply.into_result().unwrap().as_str(), "U F L2 D R B2");
    }

    #[test]
    fn test_reply_empty_solution_is_valid() {
        let reply = SolveReply::success("").unwrap();
        assert_eq!(reply.into_result().unwrap().as_str(), "");
    }

    #[test]
    fn test_reply_failure() {
        let err = SolveReply::failure("String length is not correct!")
            .into_result()
            .unwrap_err();
        match err {
            ServiceError::Rejected(reason) => {
                assert_eq!(reason.as_str(), "String length is not correct!")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_uppercase_descriptions_validate(description in "[A-Z]{54}") {
            proptest::prop_assert_eq!(validate_description(&description), Ok(()));
        }

        #[test]
        fn prop_wrong_length_rejected(description in "[A-Z]{0,53}|[A-Z]{55,80}") {
            let rejected = matches!(
                validate_description(&description),
                Err(DescriptionError::WrongLength(_))
            );
            proptest::prop_assert!(rejected);
        }
    }
}
