//! Statistics reporting.

use console::style;

use crate::download::{CourseStats, RunStats};

/// Print statistics for a single course.
pub fn print_course_stats(stats: &CourseStats) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", stats.course_name)).bold()
    );
    println!("  Files:    {}", stats.file_count);
    println!("  Folders:  {}", stats.folder_count);
    if stats.unextracted_count > 0 {
        println!(
            "  Not extracted: {}",
            style(stats.unextracted_count).yellow()
        );
    }
    if !stats.failures.is_empty() {
        println!("  Failed:   {}", style(stats.failed_count()).red());
        for (url, error) in &stats.failures {
            println!("    {} {}", style(url).dim(), error);
        }
    }
}

/// Print statistics across all courses.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Summary:").bold());
    println!("  Courses processed: {}", stats.courses_processed);
    if stats.courses_failed > 0 {
        println!("  Courses failed:    {}", style(stats.courses_failed).red());
    }
    if !stats.unknown_courses.is_empty() {
        println!(
            "  Unknown courses:   {}",
            style(stats.unknown_courses.join(", ")).yellow()
        );
    }
    println!("  Files:   {}", stats.file_count);
    println!("  Folders: {}", stats.folder_count);
    if stats.unextracted_count > 0 {
        println!("  Not extracted: {}", style(stats.unextracted_count).yellow());
    }
    if stats.failed_links > 0 {
        println!("  Failed links:  {}", style(stats.failed_links).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
