//! Renderer move timing

/// Timing source for the flattened algorithm
///
/// Implemented by the host's renderer, which knows how long each leaf
/// move animates. Leaves are numbered from 0 across the whole solution.
pub trait MoveIndexer {
    /// Check whether timing data is available yet
    fn is_ready(&self) -> bool;

    /// Timestamp (ms) at which leaf move `leaf` starts
    ///
    /// Returns None if the leaf is unknown to the renderer.
    fn move_start(&self, leaf: usize) -> Option<f32>;

    /// Animation length (ms) of leaf move `leaf`
    fn move_duration(&self, leaf: usize) -> Option<f32>;

    /// Timestamp (ms) at which leaf move `leaf` ends
    fn move_end(&self, leaf: usize) -> Option<f32> {
        Some(self.move_start(leaf)? + self.move_duration(leaf)?)
    }
}
