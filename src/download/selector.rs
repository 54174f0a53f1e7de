//! Course selection and the sequential per-course loop.

use std::path::PathBuf;

use crate::api::MoodleSession;
use crate::config::{Course, CourseTable};
use crate::download::course::download_course;
use crate::download::state::RunStats;
use crate::error::Error;
use crate::output::{print_course_stats, print_error, print_info, print_warning};

/// Options shared by every course download in a run.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub download_root: PathBuf,
    pub max_workers: usize,
}

/// Courses resolved from the names given on the command line.
#[derive(Debug, PartialEq, Eq)]
pub struct Selection<'a> {
    pub courses: Vec<&'a Course>,
    pub unknown: Vec<String>,
}

/// Resolve course names against the table.
///
/// No names selects every configured course in table order. Otherwise names
/// are matched case-insensitively, in the order given. A numeric argument that
/// matches no name is tried as a course ID. Anything still unmatched is
/// collected in `unknown`.
pub fn select_courses<'a, S: AsRef<str>>(table: &'a CourseTable, names: &[S]) -> Selection<'a> {
    if names.is_empty() {
        return Selection {
            courses: table.iter().collect(),
            unknown: Vec::new(),
        };
    }

    let mut selection = Selection {
        courses: Vec::with_capacity(names.len()),
        unknown: Vec::new(),
    };

    for name in names {
        let name = name.as_ref();
        let course = table.by_name(name).or_else(|| {
            name.trim()
                .parse::<u64>()
                .ok()
                .and_then(|id| table.by_id(id))
        });

        match course {
            Some(course) => selection.courses.push(course),
            None => selection.unknown.push(name.to_string()),
        }
    }

    selection
}

/// Download the selected courses one after another.
///
/// Unknown names and courses whose page cannot be fetched are reported and
/// skipped; the remaining courses still run.
pub async fn download_selected<S: AsRef<str>>(
    session: &MoodleSession,
    table: &CourseTable,
    names: &[S],
    options: &DownloadOptions,
) -> RunStats {
    let selection = select_courses(table, names);
    let mut run_stats = RunStats::default();

    for name in selection.unknown {
        print_warning(&format!("{}, skipping", Error::UnknownCourse(name.clone())));
        run_stats.mark_unknown_course(name);
    }

    for course in selection.courses {
        print_info(&format!("Downloading files for course: {}", course));

        match download_course(
            session,
            course,
            &options.download_root,
            options.max_workers,
        )
        .await
        {
            Ok(stats) => {
                print_course_stats(&stats);
                run_stats.add_course_stats(&stats);
            }
            Err(e) => {
                print_error(&format!("Failed to process {}: {}", course.name, e));
                run_stats.mark_course_failed();
            }
        }
    }

    run_stats
}
