//! Replay log
//!
//! The solution as an ordered list of move-groups. Any displayed state is
//! rebuilt by replaying from a fresh cube, never by stepping backwards.

pub mod script;

pub use script::{MirrorFlags, ScriptError, SolveScript};
