//! Link module.
//!
//! Turns a course page into the list of things worth downloading.

pub mod classifier;
pub mod target;

pub use classifier::{classify, extract_links, resolve_link};
pub use target::{parse_folder_id, DownloadTarget, FOLDER_MARKER, RESOURCE_MARKER};
