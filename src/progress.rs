// src/progress.rs
use std::path::Path;

/// Progress reporting for a pipeline run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _stages: usize) {}

    /// A stage is starting.
    fn stage(&mut self, _name: &str) {}

    /// A file was written.
    fn wrote(&mut self, _path: &Path) {}

    /// Called once the run has succeeded.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
