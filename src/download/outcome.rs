//! Per-link download results.

use std::fmt;
use std::path::PathBuf;

/// What a successful fetch left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A single file was written.
    File { path: PathBuf },
    /// A folder archive was downloaded into `dir`.
    ///
    /// When `extracted` is false the archive could not be unpacked and is
    /// left in `dir` as downloaded.
    Folder {
        dir: PathBuf,
        archive: PathBuf,
        extracted: bool,
        file_count: usize,
    },
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::File { path } => write!(f, "Downloaded {}", path.display()),
            FetchOutcome::Folder {
                dir,
                extracted: true,
                file_count,
                ..
            } => write!(f, "Extracted {} file(s) into {}", file_count, dir.display()),
            FetchOutcome::Folder {
                archive,
                extracted: false,
                ..
            } => write!(f, "Downloaded {} (not extracted)", archive.display()),
        }
    }
}
