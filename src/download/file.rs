//! Single-file resource download.

use std::path::Path;

use reqwest::header::CONTENT_DISPOSITION;
use url::Url;

use crate::api::MoodleSession;
use crate::download::outcome::FetchOutcome;
use crate::download::writer::save_response;
use crate::error::{Error, Result};
use crate::fs::naming::{filename_from_content_disposition, filename_from_url, sanitize_filename};

/// Download a resource link into `dest_dir`.
///
/// The resource page is requested with `redirect=1` so Moodle answers with the
/// file itself. The name comes from `Content-Disposition`, falling back to the
/// last segment of the resource URL. An existing file with that name is
/// overwritten.
pub async fn fetch_file(session: &MoodleSession, url: &Url, dest_dir: &Path) -> Result<FetchOutcome> {
    let download_url = Url::parse(&format!("{}&redirect=1", url))?;
    let response = session.download_file(download_url).await?;

    let header_name = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|value| {
            filename_from_content_disposition(&String::from_utf8_lossy(value.as_bytes()))
        });

    let filename = header_name
        .or_else(|| filename_from_url(url))
        .ok_or_else(|| Error::InvalidFilename(format!("No filename for {}", url)))?;
    let filename = sanitize_filename(&filename)?;

    let path = dest_dir.join(&filename);
    let size = save_response(response, &path).await?;
    tracing::debug!("Wrote {} bytes to {}", size, path.display());

    Ok(FetchOutcome::File { path })
}
