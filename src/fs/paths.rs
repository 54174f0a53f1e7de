//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Course;
use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Get the download folder for a course.
pub fn get_course_folder(download_root: &Path, course: &Course) -> Result<PathBuf> {
    Ok(download_root.join(sanitize_path_component(&course.name)?))
}

/// Remove a directory with all of its contents, then create it again empty.
///
/// A missing directory is simply created.
pub async fn recreate_dir(path: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => tracing::debug!("Removed existing directory {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_course_folder() {
        let course = Course::new(14220, "EE-556");
        let path = get_course_folder(Path::new("/downloads"), &course).unwrap();
        assert_eq!(path, PathBuf::from("/downloads/EE-556"));
    }

    #[test]
    fn test_get_course_folder_rejects_traversal() {
        let course = Course::new(1, "../outside");
        assert!(get_course_folder(Path::new("/downloads"), &course).is_err());
    }

    #[tokio::test]
    async fn test_recreate_dir_creates_missing() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("b");

        recreate_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_recreate_dir_wipes_contents() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("course");
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("stale.pdf"), b"old").unwrap();
        std::fs::write(dir.join("nested").join("old.txt"), b"old").unwrap();

        recreate_dir(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }
}
