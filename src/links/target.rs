//! Download target classification.

use std::fmt;

use url::Url;

/// Substring identifying a single-file resource link.
pub const RESOURCE_MARKER: &str = "mod/resource/view.php?id=";

/// Substring identifying a folder link.
pub const FOLDER_MARKER: &str = "mod/folder/view.php?id=";

/// What a course page link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    /// A resource downloaded as one file.
    SingleFile { url: Url },
    /// A folder downloaded as a zip archive.
    FolderArchive { url: Url, folder_id: String },
    /// Anything else on the page.
    Ignored { url: Url },
}

impl DownloadTarget {
    /// Classify an absolute URL. Resource links win over folder links.
    pub fn from_url(url: Url) -> Self {
        let text = url.as_str();

        if text.contains(RESOURCE_MARKER) {
            DownloadTarget::SingleFile { url }
        } else if let Some(folder_id) = parse_folder_id(text) {
            DownloadTarget::FolderArchive { url, folder_id }
        } else {
            DownloadTarget::Ignored { url }
        }
    }

    pub fn url(&self) -> &Url {
        match self {
            DownloadTarget::SingleFile { url }
            | DownloadTarget::FolderArchive { url, .. }
            | DownloadTarget::Ignored { url } => url,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, DownloadTarget::Ignored { .. })
    }
}

impl fmt::Display for DownloadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadTarget::SingleFile { url } => write!(f, "file {}", url),
            DownloadTarget::FolderArchive { folder_id, .. } => write!(f, "folder {}", folder_id),
            DownloadTarget::Ignored { url } => write!(f, "ignored {}", url),
        }
    }
}

/// Folder ID of a folder link: the text after the marker's `id=` up to the
/// next `&` or `#`.
///
/// Returns `None` when the URL is not a folder link.
pub fn parse_folder_id(url: &str) -> Option<String> {
    let start = url.find(FOLDER_MARKER)? + FOLDER_MARKER.len();
    let rest = &url[start..];
    let end = rest.find(['&', '#']).unwrap_or(rest.len());

    Some(rest[..end].to_string())
}
