//! Course table: the static mapping between course IDs and short names.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A Moodle course known to the downloader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Numeric course ID used in `course/view.php?id=`.
    pub id: u64,

    /// Short name, also used as the course's download folder.
    pub name: String,
}

impl Course {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

/// Courses downloaded when no configuration file provides a table.
pub fn default_courses() -> Vec<Course> {
    vec![
        Course::new(14220, "EE-556"),
        Course::new(13734, "CS-450"),
        Course::new(15989, "HUM-401"),
    ]
}

/// Immutable bidirectional lookup over the configured courses.
///
/// Name lookups are case-insensitive. Iteration follows configuration order.
#[derive(Debug, Clone)]
pub struct CourseTable {
    courses: Vec<Course>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<u64, usize>,
}

impl CourseTable {
    /// Build a table, rejecting duplicate IDs and names.
    pub fn new(courses: Vec<Course>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(courses.len());
        let mut by_id = HashMap::with_capacity(courses.len());

        for (index, course) in courses.iter().enumerate() {
            if by_id.insert(course.id, index).is_some() {
                return Err(Error::ConfigValidation {
                    field: "courses".to_string(),
                    message: format!("Duplicate course ID {}", course.id),
                });
            }
            if by_name.insert(normalize(&course.name), index).is_some() {
                return Err(Error::ConfigValidation {
                    field: "courses".to_string(),
                    message: format!("Duplicate course name '{}'", course.name),
                });
            }
        }

        Ok(Self {
            courses,
            by_name,
            by_id,
        })
    }

    /// Look up a course by its short name, ignoring case.
    pub fn by_name(&self, name: &str) -> Option<&Course> {
        self.by_name
            .get(&normalize(name))
            .map(|&index| &self.courses[index])
    }

    /// Look up a course by its numeric ID.
    pub fn by_id(&self, id: u64) -> Option<&Course> {
        self.by_id.get(&id).map(|&index| &self.courses[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}
