// src/file.rs
use std::fs;
use std::path::Path;

use crate::config::options::PipelineOptions;
use crate::error::{Error, IoContext, Result};

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).at(dir)?;
    }
    Ok(())
}

/// Ensure the parent directory of a file path exists.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// Create every output location a run writes to.
/// The pipeline itself never creates directories.
pub fn prepare_outputs(opts: &PipelineOptions) -> Result<()> {
    ensure_parent(&opts.diff_out)?;
    ensure_directory(&opts.groups_dir)
}
