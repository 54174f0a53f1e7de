//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Moodle Downloader                                 ║
║     Course materials from moodle.epfl.ch              ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(courses: &[String], max_workers: usize, download_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    if courses.is_empty() {
        println!("  Courses: all configured");
    } else {
        println!("  Courses: {}", courses.join(", "));
    }
    println!("  Workers: {}", max_workers);
    println!("  Directory: {}", download_dir);
    println!();
}
