//! Host-side solve playback
//!
//! Glues the core crate into something a UI can drive:
//! - `config`: `player.toml` loading and validation
//! - `controller`: per-frame playback of a solve script
//! - `scanner`: the scan-then-solve workflow against external services
//!
//! Rendering, camera capture and service transport belong to the host.

#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod scanner;

pub use config::{ConfigError, PlayerConfig};
pub use controller::{Frame, PlaybackController};
pub use scanner::{ScanOutcome, ScanWorkflow, UserMessage};
