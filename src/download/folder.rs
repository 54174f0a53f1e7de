//! Folder download: fetch the folder as a zip archive and unpack it.

use std::path::Path;

use reqwest::header::CONTENT_DISPOSITION;

use crate::api::MoodleSession;
use crate::download::outcome::FetchOutcome;
use crate::download::writer::save_response;
use crate::error::Result;
use crate::fs::archive::extract_archive;
use crate::fs::naming::{
    encoded_filename_from_content_disposition, folder_name_from_archive, sanitize_filename,
};
use crate::fs::paths::recreate_dir;

/// Download folder `folder_id` as an archive and extract it under `dest_dir`.
///
/// The archive lands in `dest_dir/<folder name>`, which is wiped first. After
/// a successful extraction the archive is removed; if the content cannot be
/// unpacked the archive stays where it was written and the failure is only
/// logged.
pub async fn fetch_folder(
    session: &MoodleSession,
    folder_id: &str,
    dest_dir: &Path,
) -> Result<FetchOutcome> {
    let url = session.portal().folder_download(folder_id)?;
    // A failed request leaves the folder directory untouched.
    let response = session.download_file(url).await?;

    let filename = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|value| {
            encoded_filename_from_content_disposition(&String::from_utf8_lossy(value.as_bytes()))
        })
        .unwrap_or_else(|| format!("folder_{}.zip", folder_id));
    let filename = sanitize_filename(&filename)?;
    let folder_name = sanitize_filename(&folder_name_from_archive(&filename, folder_id))?;

    let dir = dest_dir.join(&folder_name);
    recreate_dir(&dir).await?;

    let archive = dir.join(&filename);
    let size = save_response(response, &archive).await?;
    tracing::debug!("Wrote {} bytes to {}", size, archive.display());

    let extraction = {
        let archive = archive.clone();
        let dir = dir.clone();
        tokio::task::spawn_blocking(move || extract_archive(&archive, &dir)).await?
    };

    match extraction {
        Ok(files) => {
            tokio::fs::remove_file(&archive).await?;
            tracing::info!(
                "Extracted and removed archive {} in {}",
                filename,
                dir.display()
            );
            Ok(FetchOutcome::Folder {
                dir,
                archive,
                extracted: true,
                file_count: files.len(),
            })
        }
        Err(e) => {
            tracing::warn!("{}. It may not be a zip file.", e);
            Ok(FetchOutcome::Folder {
                dir,
                archive,
                extracted: false,
                file_count: 0,
            })
        }
    }
}
