//! Configuration structures and loading logic.

use crate::config::courses::{default_courses, Course, CourseTable};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default width of the per-course worker pool.
pub const DEFAULT_MAX_WORKERS: usize = 5;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_courses")]
    pub courses: Vec<Course>,

    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Portal credentials.
///
/// Usually supplied through `MOODLE_USERNAME` / `MOODLE_PASSWORD` rather than
/// written to the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default, skip_serializing)]
    pub password: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for course folders.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Number of concurrent downloads per course.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            courses: default_courses(),
            account: AccountConfig::default(),
            options: OptionsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Build the immutable course lookup table.
    pub fn course_table(&self) -> Result<CourseTable> {
        CourseTable::new(self.courses.clone())
    }
}
