//! Scan session state

use core::fmt;

use strophe_protocol::{FaceScanReply, ServiceError, SolveRequest, FACE_TILES};

use crate::config::ScanConfig;
use crate::cube::{Color, Face, FACE_SIZE};

/// Reasons a scan is not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// The scan service failed or rejected the image
    Service(ServiceError),
    /// The detected center is not the face the user was asked to scan
    CenterMismatch {
        expected: Color,
        detected: Option<char>,
    },
    /// Tile `index` is missing or not a color letter
    UnreadableTile(usize),
    /// All six faces are already scanned
    Complete,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Service(e) => write!(f, "{}", e),
            ScanError::CenterMismatch { expected, .. } => write!(
                f,
                "The center sticker does not match the selected face ({}).",
                expected.name()
            ),
            ScanError::UnreadableTile(index) => {
                write!(f, "Could not read tile {}, try again with better light", index + 1)
            }
            ScanError::Complete => write!(f, "All faces are already scanned"),
        }
    }
}

/// What the user should scan next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanPrompt {
    /// Face to scan
    pub face: Face,
    /// Center color that face must show
    pub center: Color,
    /// Center color that must point up while scanning
    pub top: Color,
    /// Position in the scan order (0-based)
    pub position: usize,
}

/// Progress through the six-face scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSession {
    order: [Face; 6],
    /// Accepted tiles, indexed by face
    faces: [Option<[Color; FACE_SIZE]>; 6],
    /// Index into `order` of the next face to scan
    next: usize,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl ScanSession {
    /// Start an empty session
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            order: config.order,
            faces: [None; 6],
            next: 0,
        }
    }

    /// Next face to scan, or None when complete
    pub fn prompt(&self) -> Option<ScanPrompt> {
        let face = *self.order.get(self.next)?;
        Some(ScanPrompt {
            face,
            center: face.solved_color(),
            top: face.reading_top().solved_color(),
            position: self.next,
        })
    }

    /// Validate a scan reply for the prompted face and store it
    ///
    /// Tile and center letters are read with `Color::from_letter`, so case
    /// does not matter. On error the session is unchanged. Returns the face
    /// that was stored.
    pub fn accept(&mut self, reply: &FaceScanReply) -> Result<Face, ScanError> {
        let prompt = self.prompt().ok_or(ScanError::Complete)?;

        if !reply.ok {
            let err = match reply.clone().into_result() {
                Err(e) => e,
                Ok(_) => ServiceError::Malformed,
            };
            return Err(ScanError::Service(err));
        }

        let detected = reply.detected_center;
        if detected.and_then(Color::from_letter) != Some(prompt.center) {
            warn!("scan: expected {} center", prompt.center);
            return Err(ScanError::CenterMismatch {
                expected: prompt.center,
                detected,
            });
        }

        let mut tiles = [prompt.center; FACE_SIZE];
        let read = reply.tiles.as_deref().unwrap_or(&[]);
        for (index, tile) in tiles.iter_mut().enumerate() {
            *tile = read
                .get(index)
                .copied()
                .and_then(Color::from_letter)
                .ok_or(ScanError::UnreadableTile(index))?;
        }

        self.faces[prompt.face.index()] = Some(tiles);
        self.next += 1;
        info!("scan: accepted {} ({=usize}/6)", prompt.face, self.next);
        Ok(prompt.face)
    }

    /// Discard the most recent accepted face
    pub fn remove_previous(&mut self) -> Option<Face> {
        self.next = self.next.checked_sub(1)?;
        let face = self.order[self.next];
        self.faces[face.index()] = None;
        Some(face)
    }

    /// Discard everything
    pub fn reset(&mut self) {
        self.faces = [None; 6];
        self.next = 0;
    }

    /// Number of accepted faces
    pub fn scanned(&self) -> usize {
        self.next
    }

    /// Check whether all six faces are accepted
    pub fn is_complete(&self) -> bool {
        self.next == self.order.len()
    }

    /// Accepted tiles of `face`
    pub fn face(&self, face: Face) -> Option<&[Color; FACE_SIZE]> {
        self.faces[face.index()].as_ref()
    }

    /// Solver request for a complete session
    pub fn solve_request(&self) -> Option<SolveRequest> {
        let mut letters = [[' '; FACE_TILES]; 6];
        for face in Face::ALL {
            let tiles = self.face(face)?;
            for (letter, color) in letters[face.index()].iter_mut().zip(tiles) {
                *letter = color.letter();
            }
        }
        Some(SolveRequest::from_faces(&letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strophe_protocol::message;

    fn solid(color: Color) -> FaceScanReply {
        FaceScanReply::from_tiles([color.letter(); FACE_TILES])
    }

    fn scan_all(session: &mut ScanSession) {
        while let Some(prompt) = session.prompt() {
            session.accept(&solid(prompt.center)).unwrap();
        }
    }

    #[test]
    fn test_prompts_follow_order() {
        let session = ScanSession::default();
        let prompt = session.prompt().unwrap();
        assert_eq!(prompt.face, Face::Front);
        assert_eq!(prompt.center, Color::Green);
        assert_eq!(prompt.top, Color::White);
        assert_eq!(prompt.position, 0);
    }

    #[test]
    fn test_top_color_for_up_and_down() {
        let mut session = ScanSession::default();
        session.accept(&solid(Color::Green)).unwrap();
        session.accept(&solid(Color::Red)).unwrap();
        let up = session.prompt().unwrap();
        assert_eq!(up.face, Face::Up);
        assert_eq!(up.top, Color::Blue);

        session.accept(&solid(Color::White)).unwrap();
        session.accept(&solid(Color::Orange)).unwrap();
        let down = session.prompt().unwrap();
        assert_eq!(down.face, Face::Down);
        assert_eq!(down.top, Color::Green);
    }

    #[test]
    fn test_center_mismatch_does_not_advance() {
        let mut session = ScanSession::default();
        let err = session.accept(&solid(Color::Red)).unwrap_err();
        assert_eq!(
            err,
            ScanError::CenterMismatch {
                expected: Color::Green,
                detected: Some('R'),
            }
        );
        assert_eq!(session.scanned(), 0);
        assert_eq!(session.prompt().unwrap().face, Face::Front);
    }

    #[test]
    fn test_service_failure_does_not_advance() {
        let mut session = ScanSession::default();
        let err = session
            .accept(&FaceScanReply::failure("No face detected"))
            .unwrap_err();
        assert_eq!(err, ScanError::Service(ServiceError::Rejected(message("No face detected"))));
        assert_eq!(session.scanned(), 0);
    }

    #[test]
    fn test_unreadable_tile() {
        let mut session = ScanSession::default();
        let mut tiles = ['G'; FACE_TILES];
        tiles[6] = '?';
        let err = session.accept(&FaceScanReply::from_tiles(tiles)).unwrap_err();
        assert_eq!(err, ScanError::UnreadableTile(6));

        let short = FaceScanReply {
            ok: true,
            tiles: Some(heapless::Vec::from_slice(&['G', 'G']).unwrap()),
            detected_center: Some('G'),
            error: None,
        };
        assert_eq!(session.accept(&short), Err(ScanError::UnreadableTile(2)));
        assert_eq!(session.scanned(), 0);
    }

    #[test]
    fn test_lowercase_letters_accepted() {
        let mut session = ScanSession::default();
        let reply = FaceScanReply::success(['g'; FACE_TILES], 'g');
        assert_eq!(session.accept(&reply), Ok(Face::Front));
    }

    #[test]
    fn test_complete_session_builds_request() {
        let mut session = ScanSession::default();
        assert!(session.solve_request().is_none());
        scan_all(&mut session);

        assert!(session.is_complete());
        assert!(session.prompt().is_none());
        assert_eq!(session.accept(&solid(Color::Green)), Err(ScanError::Complete));

        let request = session.solve_request().unwrap();
        assert_eq!(request.front.as_str(), "GGGGGGGGG");
        assert_eq!(request.up.as_str(), "WWWWWWWWW");
        assert_eq!(request.validate(), Ok(()));
        assert!(request.facelet_string().starts_with("WWWWWWWWWRRRRRRRRR"));
    }

    #[test]
    fn test_remove_previous_and_reset() {
        let mut session = ScanSession::default();
        assert_eq!(session.remove_previous(), None);

        session.accept(&solid(Color::Green)).unwrap();
        session.accept(&solid(Color::Red)).unwrap();
        assert_eq!(session.remove_previous(), Some(Face::Right));
        assert!(session.face(Face::Right).is_none());
        assert!(session.face(Face::Front).is_some());
        assert_eq!(session.prompt().unwrap().face, Face::Right);

        session.reset();
        assert_eq!(session.scanned(), 0);
        assert!(session.face(Face::Front).is_none());
    }
}
