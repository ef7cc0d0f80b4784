//! Collaborator traits
//!
//! These traits define the interface between the playback engine and the
//! host-provided renderer and services.

pub mod indexer;
pub mod services;

pub use indexer::MoveIndexer;
pub use services::{FaceScanner, Solver};
