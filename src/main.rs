//! CLI entry point for the leaderboard generator.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use leaderboard_gen::{Filter, LeaderboardConfig, generate};
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "leaderboard_gen")]
#[command(about = "Generate the processor benchmark leaderboard", long_about = None)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = "README.md")]
    output: PathBuf,

    /// Filter by year (for custom output)
    #[arg(short, long)]
    year: Option<String>,

    /// Filter by semester (for custom output)
    #[arg(short, long)]
    semester: Option<String>,

    /// Directory holding the CSV result files [env: LEADERBOARD_DATA_DIR]
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding title, metrics and manifest name
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip writing files.json
    #[arg(long, default_value_t = false)]
    no_manifest: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Keep the guard alive so the file writer flushes on exit.
    let _file_guard = init_logging();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LeaderboardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LeaderboardConfig::default(),
    }
    .with_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    debug!(?config, "Configuration resolved");

    let filter = Filter::new(cli.year, cli.semester);

    generate(&config, &filter, &cli.output, !cli.no_manifest)
        .with_context(|| format!("generating leaderboard from {}", config.data_dir.display()))?;

    Ok(())
}

/// Colored stderr logging, plus a JSON rolling log file when `LOG_FILE_PATH` is set.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_path = Path::new(&log_file_path);
            let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
            let log_file_name = log_path
                .file_name()
                .unwrap_or(OsStr::new("leaderboard_gen.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::try_from_env("RUST_LOG_JSON")
                        .unwrap_or_else(|_| EnvFilter::new("debug")),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}
