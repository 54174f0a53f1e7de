//! Download statistics.

use crate::download::outcome::FetchOutcome;
use crate::error::Error;
use crate::links::DownloadTarget;

/// Per-course download statistics.
#[derive(Debug, Default)]
pub struct CourseStats {
    pub course_name: String,

    pub file_count: u64,
    pub folder_count: u64,
    pub unextracted_count: u64,
    pub ignored_count: u64,

    /// Failed links with the error that stopped them.
    pub failures: Vec<(String, String)>,
}

impl CourseStats {
    pub fn new(course_name: impl Into<String>) -> Self {
        Self {
            course_name: course_name.into(),
            ..Default::default()
        }
    }

    /// Record the result of one dispatched link.
    pub fn record(&mut self, target: &DownloadTarget, result: &Result<FetchOutcome, Error>) {
        match result {
            Ok(FetchOutcome::File { .. }) => self.file_count += 1,
            Ok(FetchOutcome::Folder { extracted, .. }) => {
                self.folder_count += 1;
                if !extracted {
                    self.unextracted_count += 1;
                }
            }
            Err(e) => self
                .failures
                .push((target.url().to_string(), e.to_string())),
        }
    }

    pub fn failed_count(&self) -> u64 {
        self.failures.len() as u64
    }

    /// Links that completed, whether or not a folder could be extracted.
    pub fn succeeded_count(&self) -> u64 {
        self.file_count + self.folder_count
    }
}

/// Statistics across all selected courses.
#[derive(Debug, Default)]
pub struct RunStats {
    pub courses_processed: u64,
    pub courses_failed: u64,
    pub unknown_courses: Vec<String>,
    pub file_count: u64,
    pub folder_count: u64,
    pub unextracted_count: u64,
    pub failed_links: u64,
}

impl RunStats {
    /// Add statistics from a finished course.
    pub fn add_course_stats(&mut self, stats: &CourseStats) {
        self.courses_processed += 1;
        self.file_count += stats.file_count;
        self.folder_count += stats.folder_count;
        self.unextracted_count += stats.unextracted_count;
        self.failed_links += stats.failed_count();
    }

    /// Mark a course whose page could not be processed.
    pub fn mark_course_failed(&mut self) {
        self.courses_failed += 1;
    }

    pub fn mark_unknown_course(&mut self, name: impl Into<String>) {
        self.unknown_courses.push(name.into());
    }
}
