//! Moodle Downloader - bulk download of course materials from an SSO-protected Moodle.
//!
//! This library logs into Moodle through the Tequila SSO and mirrors course
//! pages to local folders.
//!
//! # Features
//!
//! - Two-step SSO login with a shared cookie session
//! - Link classification of course pages (files, folders, everything else)
//! - Folder downloads as zip archives, extracted in place
//! - Bounded concurrent downloads per course
//! - Course selection by case-insensitive short name
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use moodle_downloader::{api::login, download_selected, Config, DownloadOptions, Portal};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let table = config.course_table()?;
//!     let session = login(Portal::epfl()?, "username", "password").await?;
//!
//!     let options = DownloadOptions {
//!         download_root: PathBuf::from("."),
//!         max_workers: 5,
//!     };
//!     let stats = download_selected(&session, &table, &["EE-556"], &options).await;
//!     println!("{} files downloaded", stats.file_count);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod links;
pub mod output;

// Re-exports for convenience
pub use api::{MoodleSession, Portal};
pub use config::{Config, Course, CourseTable};
pub use download::{
    download_course, download_selected, fetch_file, fetch_folder, CourseStats, DownloadOptions,
    FetchOutcome, RunStats,
};
pub use error::{Error, Result};
pub use links::{classify, DownloadTarget};
