//! Download module for course content.
//!
//! This module provides:
//! - Single-file and folder-archive fetchers
//! - The per-course worker pool
//! - Course selection across a run
//! - Download statistics

pub mod course;
pub mod file;
pub mod folder;
pub mod outcome;
pub mod selector;
pub mod state;
pub mod writer;

pub use course::download_course;
pub use file::fetch_file;
pub use folder::fetch_folder;
pub use outcome::FetchOutcome;
pub use selector::{download_selected, select_courses, DownloadOptions, Selection};
pub use state::{CourseStats, RunStats};
