//! Configuration validation logic.

use crate::config::loader::Config;
use crate::config::courses::CourseTable;
use crate::error::{Error, Result};
use crate::fs::naming::sanitize_path_component;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_credentials(&config.account.username, &config.account.password)?;
    validate_max_workers(config.options.max_workers)?;
    validate_courses(config)?;

    Ok(())
}

/// Validate that both credentials are present.
pub fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::MissingConfig(
            "username (set MOODLE_USERNAME in your environment)".to_string(),
        ));
    }

    if password.is_empty() {
        return Err(Error::MissingConfig(
            "password (set MOODLE_PASSWORD in your environment)".to_string(),
        ));
    }

    Ok(())
}

/// Validate the worker pool width.
pub fn validate_max_workers(max_workers: usize) -> Result<()> {
    if max_workers == 0 {
        return Err(Error::ConfigValidation {
            field: "max_workers".to_string(),
            message: "At least one worker is required".to_string(),
        });
    }

    Ok(())
}

/// Validate the course table.
///
/// Course names become directory names, so each must be a safe path component
/// that maps to itself.
pub fn validate_courses(config: &Config) -> Result<()> {
    if config.courses.is_empty() {
        return Err(Error::MissingConfig(
            "courses (at least one course is required)".to_string(),
        ));
    }

    for course in &config.courses {
        let sanitized =
            sanitize_path_component(&course.name).map_err(|e| Error::ConfigValidation {
                field: "courses".to_string(),
                message: format!("Course name '{}' is not usable: {}", course.name, e),
            })?;

        if sanitized != course.name {
            return Err(Error::ConfigValidation {
                field: "courses".to_string(),
                message: format!(
                    "Course name '{}' contains characters not allowed in folder names",
                    course.name
                ),
            });
        }
    }

    CourseTable::new(config.courses.clone())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Course;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.account.username = "alice".to_string();
        config.account.password = "secret".to_string();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_username() {
        let mut config = valid_config();
        config.account.username.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_missing_password() {
        let mut config = valid_config();
        config.account.password.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = valid_config();
        config.options.max_workers = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_empty_course_table_rejected() {
        let mut config = valid_config();
        config.courses.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unsafe_course_name_rejected() {
        let mut config = valid_config();
        config.courses = vec![Course::new(1, "../escape")];
        assert!(validate_config(&config).is_err());

        config.courses = vec![Course::new(1, "CS/450")];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_duplicate_courses_rejected() {
        let mut config = valid_config();
        config.courses = vec![Course::new(1, "CS-450"), Course::new(2, "cs-450")];
        assert!(validate_config(&config).is_err());
    }
}
