//! Benchmark leaderboard generator.
//!
//! Reads `{year}-{semester}-{university}.csv` result files from a data
//! directory, ranks every team per metric and renders a markdown
//! leaderboard, plus a `files.json` manifest for the web view.

pub mod config;
pub mod dataset;
pub mod error;
pub mod leaderboard;
pub mod loader;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod record;

use std::path::Path;

use tracing::info;

pub use config::LeaderboardConfig;
pub use dataset::{Dataset, Filter};
pub use error::{Error, Result};
pub use metrics::{MetricDescriptor, MetricKey};
pub use record::Record;

/// Runs the whole pipeline and returns the rendered document.
///
/// With an empty `filter` the full leaderboard is produced; otherwise a
/// filtered document. Everything is loaded and rendered before anything is
/// written, so a bad data file leaves existing outputs untouched.
pub fn generate(
    config: &LeaderboardConfig,
    filter: &Filter,
    output: &Path,
    write_manifest: bool,
) -> Result<String> {
    info!(data_dir = %config.data_dir.display(), ?filter, "Generating leaderboard");

    let dataset = Dataset::load(&config.data_dir, filter)?;
    let document = if filter.is_empty() {
        leaderboard::full_document(&dataset, config)
    } else {
        leaderboard::custom_document(&dataset, filter, config)
    };

    if write_manifest {
        output::write_manifest(&config.data_dir, &config.manifest_path())?;
    }
    output::write_document(output, &document)?;

    Ok(document)
}
