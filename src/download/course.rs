//! Course download orchestration.

use std::path::Path;

use futures::stream::{self, StreamExt};

use crate::api::MoodleSession;
use crate::config::Course;
use crate::download::file::fetch_file;
use crate::download::folder::fetch_folder;
use crate::download::outcome::FetchOutcome;
use crate::download::state::CourseStats;
use crate::error::{Error, Result};
use crate::fs::paths::{get_course_folder, recreate_dir};
use crate::links::{classify, DownloadTarget};
use crate::output::create_item_bar;

/// Download every file and folder linked from a course page.
///
/// The course folder under `download_root` is recreated from scratch, then the
/// links are fetched by at most `max_workers` concurrent downloads. Failed
/// links are recorded in the returned stats and never stop the others. Only a
/// failure to load the course page or prepare its folder is returned as an
/// error.
pub async fn download_course(
    session: &MoodleSession,
    course: &Course,
    download_root: &Path,
    max_workers: usize,
) -> Result<CourseStats> {
    let page = session.get_course_page(course).await?;

    let course_dir = get_course_folder(download_root, course)?;
    recreate_dir(&course_dir).await?;

    let targets = classify(&page, session.portal().base_url());
    let (ignored, targets): (Vec<_>, Vec<_>) =
        targets.into_iter().partition(DownloadTarget::is_ignored);

    let mut stats = CourseStats::new(&course.name);
    stats.ignored_count = ignored.len() as u64;

    tracing::info!(
        "Found {} downloadable links for {} ({} other links ignored)",
        targets.len(),
        course.name,
        stats.ignored_count
    );

    if targets.is_empty() {
        return Ok(stats);
    }

    let progress = create_item_bar(targets.len() as u64, &course.name);

    let mut results = stream::iter(targets)
        .map(|target| {
            let session = session.clone();
            let course_dir = course_dir.clone();
            async move {
                let result = fetch_target(&session, &target, &course_dir).await;
                (target, result)
            }
        })
        .buffer_unordered(max_workers.max(1));

    while let Some((target, result)) = results.next().await {
        match &result {
            Ok(outcome) => tracing::info!("{}", outcome),
            Err(e) => tracing::error!("Error downloading {}: {}", target, e),
        }
        stats.record(&target, &result);
        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(stats)
}

/// Dispatch one target to the matching fetcher.
async fn fetch_target(
    session: &MoodleSession,
    target: &DownloadTarget,
    course_dir: &Path,
) -> Result<FetchOutcome> {
    match target {
        DownloadTarget::SingleFile { url } => fetch_file(session, url, course_dir).await,
        DownloadTarget::FolderArchive { folder_id, .. } => {
            fetch_folder(session, folder_id, course_dir).await
        }
        DownloadTarget::Ignored { url } => Err(Error::Download(format!(
            "{} is not a downloadable link",
            url
        ))),
    }
}
