//! Archive extraction for downloaded folders.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Archive formats the downloader can unpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
}

impl ArchiveFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "zip" => Some(ArchiveFormat::Zip),
            _ => None,
        }
    }
}

/// Extract an archive into `dest_path`, using the format implied by its extension.
///
/// Returns the paths of the extracted files. This is blocking; async callers
/// should run it through `spawn_blocking`.
pub fn extract_archive(archive_path: &Path, dest_path: &Path) -> Result<Vec<PathBuf>> {
    match ArchiveFormat::from_path(archive_path) {
        Some(ArchiveFormat::Zip) => extract_zip(archive_path, dest_path),
        None => Err(Error::Extraction {
            archive: archive_path.to_path_buf(),
            reason: "unknown archive format".to_string(),
        }),
    }
}

fn extract_zip(archive_path: &Path, dest_path: &Path) -> Result<Vec<PathBuf>> {
    debug!(?archive_path, ?dest_path, "extracting ZIP archive");

    std::fs::create_dir_all(dest_path)?;

    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| Error::Extraction {
        archive: archive_path.to_path_buf(),
        reason: format!("not a valid ZIP archive: {}", e),
    })?;

    let mut extracted_files = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| Error::Extraction {
            archive: archive_path.to_path_buf(),
            reason: format!("failed to read ZIP entry: {}", e),
        })?;

        let file_path = match entry.enclosed_name() {
            Some(path) => dest_path.join(path),
            None => {
                warn!(name = entry.name(), "skipping entry with unsafe path");
                continue;
            }
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&file_path)?;
            continue;
        }

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut outfile = File::create(&file_path)?;
        std::io::copy(&mut entry, &mut outfile).map_err(|e| Error::Extraction {
            archive: archive_path.to_path_buf(),
            reason: format!("failed to extract {}: {}", file_path.display(), e),
        })?;

        extracted_files.push(file_path);
    }

    info!(
        ?archive_path,
        extracted_count = extracted_files.len(),
        "ZIP extraction successful"
    );

    Ok(extracted_files)
}
