use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::metrics::{MetricDescriptor, default_metrics};

/// Environment variable overriding [`LeaderboardConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "LEADERBOARD_DATA_DIR";

/// Everything the pipeline needs besides the data itself.
///
/// May be loaded from a JSON file; every field is optional there:
/// ```json
/// {
///   "data_dir": "database",
///   "title": "RISC-V Processor Leaderboard",
///   "metrics": [
///     { "key": "ipc", "display_name": "IPC", "higher_is_better": true,
///       "label": "IPC", "description": "Instructions Per Cycle" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub data_dir: PathBuf,
    pub title: String,
    pub description: String,
    /// Table order in the generated document.
    pub metrics: Vec<MetricDescriptor>,
    /// Manifest file name, written inside `data_dir`.
    pub manifest_name: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("database"),
            title: "RISC-V Processor Leaderboard".into(),
            description: "This leaderboard compares 5-stage pipelined RISC-V processor \
                          implementations from computer architecture courses."
                .into(),
            metrics: default_metrics(),
            manifest_name: "files.json".into(),
        }
    }
}

impl LeaderboardConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `LEADERBOARD_DATA_DIR` when set.
    pub fn with_env(mut self) -> Self {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.data_dir.join(&self.manifest_name)
    }

    fn validate(&self) -> Result<()> {
        if self.metrics.is_empty() {
            return Err(Error::Config {
                message: "at least one metric must be configured".into(),
            });
        }
        for (i, metric) in self.metrics.iter().enumerate() {
            if self.metrics[..i].iter().any(|m| m.key == metric.key) {
                return Err(Error::Config {
                    message: format!("metric '{}' listed twice", metric.key.column()),
                });
            }
        }
        if self.manifest_name.is_empty() {
            return Err(Error::Config {
                message: "manifest_name must not be empty".into(),
            });
        }
        Ok(())
    }
}
