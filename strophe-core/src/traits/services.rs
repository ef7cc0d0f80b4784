//! External service traits
//!
//! Transport (HTTP, IPC, a local model) is the host's concern. A transport
//! failure is reported as `ServiceError`; a reply record with `ok = false`
//! is a successful call that the service itself rejected.

use strophe_protocol::{FaceScanReply, ServiceError, SolveReply, SolveRequest};

/// Face-scan service
pub trait FaceScanner {
    /// Label the nine stickers of one face from an image
    ///
    /// `center` is the color letter expected at the face center.
    fn scan_face(&mut self, center: char, image: &[u8]) -> Result<FaceScanReply, ServiceError>;
}

/// Solve service
pub trait Solver {
    /// Compute a whitespace-separated solution for a cube description
    fn solve(&mut self, request: &SolveRequest) -> Result<SolveReply, ServiceError>;
}
