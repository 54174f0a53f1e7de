//! Configuration module for the moodle-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - The course ID/name table
//! - Configuration validation

pub mod courses;
pub mod loader;
pub mod validation;

pub use courses::{default_courses, Course, CourseTable};
pub use loader::{AccountConfig, Config, OptionsConfig, DEFAULT_MAX_WORKERS};
pub use validation::{validate_config, validate_credentials};
