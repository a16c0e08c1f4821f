//! trainsum - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use trainsum::model::{AppError, Language};

/// trainsum - summarize workout sensor packages
#[derive(Parser, Debug)]
#[command(name = "trainsum")]
#[command(version)]
#[command(about = "Summarize workout sensor packages: distance, speed and calories")]
pub struct Args {
    /// JSONL package file, or `-` for stdin (built-in samples if omitted)
    pub file: Option<PathBuf>,

    /// Label language for summaries
    #[arg(long, value_parser = ["en", "ru"])]
    pub language: Option<String>,

    /// Skip packages that cannot be summarized instead of stopping
    #[arg(short, long)]
    pub keep_going: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "trainsum failed");
            eprintln!("trainsum: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = trainsum::config::load_config_with_precedence(args.config.clone())?;
        let merged = trainsum::config::merge_config(config_file);
        let with_env = trainsum::config::apply_env_overrides(merged);

        // --keep-going only ever turns fail-fast off
        let language_override = args.language.as_deref().and_then(Language::from_code);
        let fail_fast_override = if args.keep_going { Some(false) } else { None };

        trainsum::config::apply_cli_overrides(
            with_env,
            language_override,
            fail_fast_override,
            args.log_file.clone(),
        )
    };

    trainsum::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut source = trainsum::source::detect_package_source(args.file.clone())?;
    info!(source = %source.describe(), "Reading workout packages");
    let packages = source.poll()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = trainsum::integration::run(packages, &config, &mut out)?;
    out.flush()?;

    if config.fail_fast {
        return summary.ensure_complete();
    }
    if summary.skipped() > 0 {
        warn!(skipped = summary.skipped(), "Run finished with skipped input");
        eprintln!(
            "trainsum: skipped {} malformed line(s) and {} failed package(s)",
            summary.malformed, summary.failed
        );
    }

    Ok(())
}
