//! Course Pilot
//!
//! Loads and checks the automation configuration, then reports what was found.

use clap::Parser;
use course_pilot::{
    ConfigDocument, CourseFilter, DiscoveredConfigLoader, FileConfigLoader,
    config::{AiType, LOG_MODEL_UNSET},
    util::display_paths,
};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Course Pilot - load and check the automation configuration
#[derive(Parser, Debug)]
#[command(name = "course-pilot")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON configuration file (skips YAML discovery)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory searched for config.yaml (repeatable, default: working directory)
    #[arg(short, long = "dir")]
    dirs: Vec<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load(args: &Args) -> course_pilot::Result<ConfigDocument> {
    match &args.config {
        Some(path) => FileConfigLoader::new().load(path),
        None => {
            let mut loader = DiscoveredConfigLoader::new();
            if !args.dirs.is_empty() {
                loader = loader.with_search_dirs(&args.dirs);
            }
            info!(
                dirs = %display_paths(loader.search_dirs()),
                "Searching for config.yaml"
            );
            loader.load("./config.yaml")
        }
    }
}

fn report(config: &ConfigDocument) {
    let basic = &config.setting.basic_setting;
    match basic.log_mode() {
        Some(mode) => info!(?mode, level = %basic.log_level, "Log settings"),
        None if basic.log_model == LOG_MODEL_UNSET => {
            info!(level = %basic.log_level, "Log mode not set, using per-submission")
        }
        None => warn!(
            log_model = basic.log_model,
            "Unrecognized logModel, treating as unspecified"
        ),
    }

    let ai = &config.setting.ai_setting;
    if ai.ai_type != AiType::Unspecified && ai.api_key.is_empty() {
        warn!(ai_type = ?ai.ai_type, "AI assistant configured without an API key");
    }

    if config.users.is_empty() {
        warn!("No users configured");
    }

    for user in &config.users {
        let custom = &user.courses_custom;
        let filter = CourseFilter::new(custom);
        info!(
            account_type = %user.account_type,
            account = %user.account,
            include_courses = custom.include_courses.len(),
            exclude_courses = custom.exclude_courses.len(),
            course_rules = custom.courses_settings.len(),
            auto_exam = custom.auto_exam_enabled(),
            over_brush = user.over_brush_enabled(),
            "User configured"
        );
        if user.password.is_empty() {
            warn!(account = %user.account, "No password configured");
        }
        for rule in &custom.courses_settings {
            if !filter.admits_course(&rule.name) {
                warn!(
                    account = %user.account,
                    course = %rule.name,
                    "Exam rules given for a course that is filtered out"
                );
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting course-pilot");

    // Load configuration; any error ends the run with a non-zero status
    let config =
        load(&args).inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    report(&config);
    Ok(())
}
