//! Configuration types
//!
//! Plain data shared by the core and the host. The host decides where it
//! comes from; the player crate reads it from TOML.

pub mod types;

pub use types::*;
