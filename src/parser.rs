//! Parser for `{year}-{semester}-{university}.csv` data filenames.

use serde::Serialize;

/// Metadata encoded in a data file's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub year: String,
    pub semester: String,
    pub university: String,
    /// File name without the `.csv` suffix.
    pub full_name: String,
}

/// Splits a data filename into year, semester and university.
///
/// The university may itself contain hyphens; everything after the second
/// segment belongs to it. Returns `None` for names with fewer than three
/// segments, which callers treat as "not a data file".
pub fn parse_filename(filename: &str) -> Option<FileInfo> {
    let name = filename.strip_suffix(".csv").unwrap_or(filename);
    let parts: Vec<&str> = name.split('-').collect();
    if parts.len() < 3 {
        return None;
    }

    Some(FileInfo {
        year: parts[0].to_string(),
        semester: parts[1].to_string(),
        university: parts[2..].join("-"),
        full_name: name.to_string(),
    })
}
