//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename extraction and sanitization
//! - Archive extraction

pub mod archive;
pub mod naming;
pub mod paths;

pub use archive::{extract_archive, ArchiveFormat};
pub use naming::{
    encoded_filename_from_content_disposition, filename_from_content_disposition,
    filename_from_url, folder_name_from_archive, sanitize_filename, sanitize_path_component,
};
pub use paths::{get_course_folder, recreate_dir};
