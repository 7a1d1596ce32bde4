// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: no `colors` column in header row", .path.display())]
    MissingColorsColumn { path: PathBuf },

    #[error("{}: input file is empty (expected a header row)", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("directory does not exist: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("malformed partition file name `{name}`: {reason}")]
    PartitionName { name: String, reason: String },

    #[error("keys `{first}` and `{second}` both map to partition file stem `{stem}`")]
    StemCollision {
        stem: String,
        first: String,
        second: String,
    },

    #[error("{}: bad manifest: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io { path: path.to_path_buf(), source }
    }
}

/// Attach a path to a bare `io::Result`.
pub(crate) trait IoContext<T> {
    fn at(self, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T> {
        self.map_err(|e| Error::io(path, e))
    }
}
