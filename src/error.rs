//! Error types for the moodle-downloader application.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Course {0} not found in the course table")]
    UnknownCourse(String),

    // Portal errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Failed to parse page: {0}")]
    Parse(String),

    #[error("Failed to access course page {course}: HTTP {status}")]
    CourseFetch { course: String, status: StatusCode },

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Failed to extract {}: {reason}", archive.display())]
    Extraction { archive: PathBuf, reason: String },

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
