//! Filename extraction and sanitization.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bfilename\s*=\s*(?:"([^"]*)"|([^;]+))"#).unwrap());
static ENCODED_FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bfilename\*\s*=\s*UTF-8''([^;]+)").unwrap());

/// Sanitize a filename taken from a server response.
///
/// Path separators and characters that are invalid on common filesystems are
/// replaced with underscores. Names that would refer to the current or parent
/// directory are rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let name = name.trim();

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize a path component (course or folder name).
///
/// Stricter than [`sanitize_filename`]: any `..` sequence is rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    // Sanitize problematic characters (replace with underscore)
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() || sanitized == "." {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Extract the plain `filename=` parameter from a `Content-Disposition` header.
///
/// Surrounding quotes are stripped. The extended `filename*=` form is not
/// considered here.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let captures = FILENAME_RE.captures(header)?;
    let value = captures.get(1).or_else(|| captures.get(2))?.as_str().trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extract and percent-decode the RFC 5987 `filename*=UTF-8''...` parameter.
pub fn encoded_filename_from_content_disposition(header: &str) -> Option<String> {
    let encoded = ENCODED_FILENAME_RE.captures(header)?.get(1)?.as_str().trim();
    let decoded = percent_decode_str(encoded).decode_utf8_lossy();

    if decoded.is_empty() {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// Last non-empty path segment of a URL.
pub fn filename_from_url(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8_lossy()
                .into_owned()
        })
}

/// Derive the extraction folder name from a folder archive's filename.
///
/// Everything from the first `.zip` on is dropped, then the name is cut at the
/// first hyphen, which removes the date stamp Moodle appends
/// (`Week 1-2024-01-10.zip` becomes `Week 1`). A name that ends up empty, or
/// that is `.` or `..`, falls back to `folder_<id>`.
pub fn folder_name_from_archive(filename: &str, folder_id: &str) -> String {
    let stem = filename.split(".zip").next().unwrap_or(filename);
    let name = stem.split('-').next().unwrap_or(stem);

    if matches!(name.trim(), "" | "." | "..") {
        format!("folder_{}", folder_id)
    } else {
        name.to_string()
    }
}
