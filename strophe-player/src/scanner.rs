//! Scan workflow
//!
//! Drives the scan session against the face-scan and solve services.
//! Each capture sends one image for the prompted face; once all six faces
//! are accepted the cube is sent to the solver and the solution comes back
//! as a ready-to-play script.

use std::fmt;

use strophe_core::cube::Face;
use strophe_core::config::ScanConfig;
use strophe_core::replay::SolveScript;
use strophe_core::scan::{ScanError, ScanPrompt, ScanSession};
use strophe_core::traits::{FaceScanner, Solver};

/// How long a scan message stays visible (ms)
pub const SCAN_MESSAGE_MS: u32 = 3_000;

/// How long a solve message stays visible (ms)
pub const SOLVE_MESSAGE_MS: u32 = 10_000;

/// Error shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMessage {
    /// The scan service could not be reached
    ScanFailed,
    /// The scan was not accepted
    ScanRejected(ScanError),
    /// No usable solution came back
    SolveFailed,
}

impl UserMessage {
    /// Display time before the message clears (ms)
    pub fn display_ms(&self) -> u32 {
        match self {
            UserMessage::SolveFailed => SOLVE_MESSAGE_MS,
            _ => SCAN_MESSAGE_MS,
        }
    }
}

impl fmt::Display for UserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserMessage::ScanFailed => write!(f, "Something went wrong"),
            UserMessage::ScanRejected(e) => write!(f, "{}", e),
            UserMessage::SolveFailed => write!(f, "Could not get solution"),
        }
    }
}

impl std::error::Error for UserMessage {}

/// Result of an accepted capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// More faces to scan
    Next(ScanPrompt),
    /// All faces scanned and solved
    Solved(SolveScript),
}

/// Scan-then-solve workflow
pub struct ScanWorkflow<S, V> {
    scanner: S,
    solver: V,
    session: ScanSession,
}

impl<S: FaceScanner, V: Solver> ScanWorkflow<S, V> {
    /// Start an empty scan
    pub fn new(scanner: S, solver: V, config: &ScanConfig) -> Self {
        Self {
            scanner,
            solver,
            session: ScanSession::new(config),
        }
    }

    /// What the user should show next
    pub fn prompt(&self) -> Option<ScanPrompt> {
        self.session.prompt()
    }

    /// Scan progress
    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    /// Scan the prompted face from `image`
    ///
    /// On any error the session is unchanged and the same face is prompted
    /// again. The last accepted face triggers the solve.
    pub fn capture(&mut self, image: &[u8]) -> Result<ScanOutcome, UserMessage> {
        let prompt = self
            .session
            .prompt()
            .ok_or(UserMessage::ScanRejected(ScanError::Complete))?;

        let reply = self
            .scanner
            .scan_face(prompt.center.letter(), image)
            .map_err(|e| {
                warn!("scan service failed: {}", e);
                UserMessage::ScanFailed
            })?;
        self.session.accept(&reply).map_err(UserMessage::ScanRejected)?;

        match self.session.prompt() {
            Some(next) => Ok(ScanOutcome::Next(next)),
            None => self.solve().map(ScanOutcome::Solved),
        }
    }

    /// Ask the solver for a solution of the scanned cube
    ///
    /// Called automatically by the last capture; call again to retry after
    /// a solve failure.
    pub fn solve(&mut self) -> Result<SolveScript, UserMessage> {
        let request = self.session.solve_request().ok_or(UserMessage::SolveFailed)?;
        if let Err(e) = request.validate() {
            warn!("solve request invalid: {}", e);
            return Err(UserMessage::SolveFailed);
        }

        let reply = self.solver.solve(&request).map_err(|e| {
            warn!("solve service failed: {}", e);
            UserMessage::SolveFailed
        })?;
        let solution = reply.into_result().map_err(|e| {
            warn!("no solution: {}", e);
            UserMessage::SolveFailed
        })?;

        let script = SolveScript::from_solution(&solution).map_err(|e| {
            warn!("unusable solution: {}", e);
            UserMessage::SolveFailed
        })?;
        info!("solved in {=usize} moves", script.len());
        Ok(script)
    }

    /// Forget the most recently scanned face
    pub fn undo(&mut self) -> Option<Face> {
        self.session.remove_previous()
    }

    /// Start over
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
