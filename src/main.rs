//! Moodle Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use moodle_downloader::{
    api::{login, Portal},
    cli::Args,
    config::{validate_config, Config},
    download::{download_selected, DownloadOptions},
    error::{exit_codes, Error, Result},
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_info,
        print_run_stats, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_) | Error::Parse(_) => {
                    print_error("Exiting due to failed login.");
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::CourseFetch { .. } => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Credentials may come from a .env file
    let dotenv = dotenvy::dotenv();

    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_info(&format!(
            "No configuration file at {}, using the built-in course table",
            args.config.display()
        ));
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    if let Err(e) = validate_config(&config) {
        if matches!(e, Error::MissingConfig(_)) {
            print_warning(
                "Please set MOODLE_USERNAME and MOODLE_PASSWORD in your environment variables.",
            );
        }
        return Err(e);
    }

    let table = config.course_table()?;
    let download_root = config.download_directory();

    print_config_summary(
        &args.courses,
        config.options.max_workers,
        &download_root.display().to_string(),
    );

    // Authenticate once for the whole run
    let spinner = create_spinner("Logging in...");
    let session = login(
        Portal::epfl()?,
        &config.account.username,
        &config.account.password,
    )
    .await;
    spinner.finish_and_clear();
    let session = session?;
    print_success("Login successful!");

    let options = DownloadOptions {
        download_root,
        max_workers: config.options.max_workers,
    };
    let stats = download_selected(&session, &table, args.courses.as_slice(), &options).await;

    print_run_stats(&stats);

    if stats.courses_failed > 0 {
        return Err(Error::Download(format!(
            "{} course(s) failed",
            stats.courses_failed
        )));
    }

    print_info("All downloads completed!");
    Ok(())
}
