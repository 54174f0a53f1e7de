//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Moodle course material downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "moodle-downloader",
    version,
    about = "Download course materials from Moodle",
    long_about = "Logs into Moodle through the Tequila SSO and downloads every file and folder \
                  linked from the selected course pages.\n\n\
                  Each course is saved to a folder named after the course; the folder is \
                  recreated on every run."
)]
pub struct Args {
    /// Course names (case-insensitive) or numeric IDs to download. Downloads
    /// all configured courses when omitted.
    #[arg(value_name = "COURSE")]
    pub courses: Vec<String>,

    /// Maximum number of concurrent downloads per course.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub max_workers: Option<usize>,

    /// Base directory for course folders [default: current directory].
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Moodle username.
    #[arg(long, env = "MOODLE_USERNAME")]
    pub username: Option<String>,

    /// Moodle password.
    #[arg(long, env = "MOODLE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(username) = &self.username {
            config.account.username = username.clone();
        }

        if let Some(password) = &self.password {
            config.account.password = password.clone();
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(max_workers) = self.max_workers {
            config.options.max_workers = max_workers;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_WORKERS;

    #[test]
    fn test_parse_courses_and_workers() {
        let args = Args::try_parse_from([
            "moodle-downloader",
            "ee-556",
            "CS-450",
            "--max-workers",
            "8",
        ])
        .unwrap();

        assert_eq!(args.courses, vec!["ee-556", "CS-450"]);
        assert_eq!(args.max_workers, Some(8));
        assert_eq!(args.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn test_no_courses_means_all() {
        let args = Args::try_parse_from(["moodle-downloader"]).unwrap();
        assert!(args.courses.is_empty());
        assert_eq!(args.max_workers, None);
    }

    #[test]
    fn test_invalid_worker_count_rejected() {
        assert!(Args::try_parse_from(["moodle-downloader", "--max-workers", "many"]).is_err());
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::try_parse_from([
            "moodle-downloader",
            "--username",
            "alice",
            "--password",
            "secret",
            "--max-workers",
            "2",
            "-d",
            "/tmp/out",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.account.username, "alice");
        assert_eq!(config.account.password, "secret");
        assert_eq!(config.options.max_workers, 2);
        assert_eq!(config.download_directory(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_merge_keeps_config_values_when_unset() {
        let args = Args {
            courses: Vec::new(),
            max_workers: None,
            download_directory: None,
            username: None,
            password: None,
            config: PathBuf::from("config.toml"),
            debug: false,
        };

        let mut config = Config::default();
        config.account.username = "bob".to_string();
        args.merge_into_config(&mut config);

        assert_eq!(config.account.username, "bob");
        assert_eq!(config.options.max_workers, DEFAULT_MAX_WORKERS);
    }

    #[test]
    fn test_directory_help_names_default() {
        use clap::CommandFactory;

        let command = Args::command();
        let directory = command
            .get_arguments()
            .find(|arg| arg.get_id() == "download_directory")
            .unwrap();
        let help = directory.get_help().unwrap().to_string();
        assert!(help.contains("current directory"));
    }
}
