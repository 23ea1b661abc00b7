//! Persistence of the generated artifacts.
//!
//! Both outputs are whole-file overwrites: the markdown document and the
//! `files.json` manifest read by the web view.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::dataset::list_csv_files;

/// Sorted names of every `*.csv` file in `data_dir`.
pub fn manifest_entries(data_dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = list_csv_files(data_dir)?
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .collect();
    names.sort();
    Ok(names)
}

/// Writes the CSV file names of `data_dir` as a JSON array to `path`.
pub fn write_manifest(data_dir: &Path, path: &Path) -> Result<()> {
    let names = manifest_entries(data_dir)?;
    debug!(path = %path.display(), files = names.len(), "Writing manifest");

    let body = serde_json::to_string(&names).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body).map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), "Generated manifest");
    Ok(())
}

/// Replaces the file at `path` with `content`.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), bytes = content.len(), "Leaderboard generated");
    Ok(())
}
