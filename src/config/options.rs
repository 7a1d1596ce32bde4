// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where the reduced distribution reads its counts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// Partition file names (`red_white_12.csv`). Lossy keys.
    #[default]
    FileNames,
    /// `manifest.json`. Exact keys.
    Manifest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    pub input: PathBuf,
    /// Rejected rows are written here.
    pub diff_out: PathBuf,
    /// One CSV per color key, plus the manifest.
    pub groups_dir: PathBuf,
    pub threshold: usize,
    pub catalog: CatalogSource,
    /// Remove the files listed by a previous run's manifest before writing.
    pub prune: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            diff_out: PathBuf::from(DEFAULT_DIFF_OUT),
            groups_dir: PathBuf::from(DEFAULT_GROUPS_DIR),
            threshold: DEFAULT_THRESHOLD,
            catalog: CatalogSource::default(),
            prune: true,
        }
    }
}

impl PipelineOptions {
    /// All paths rooted under `dir`, keeping the default file names.
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = |p: &str| PathBuf::from(p).file_name().map(|n| dir.join(n)).unwrap_or_else(|| dir.clone());
        Self {
            input: name(DEFAULT_INPUT),
            diff_out: name(DEFAULT_DIFF_OUT),
            groups_dir: name(DEFAULT_GROUPS_DIR),
            ..Self::default()
        }
    }
}
