//! Face scan session
//!
//! Walks the user through the six faces in a fixed order, checks each scan
//! against the expected center, and assembles the solver request.

pub mod session;

pub use session::{ScanError, ScanPrompt, ScanSession};
