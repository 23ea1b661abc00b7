//! Dataset assembly: every data file in a directory, stamped and merged.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::loader::load_csv;
use crate::parser::{FileInfo, parse_filename};
use crate::record::Record;

/// Optional exact-match year/semester restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub year: Option<String>,
    pub semester: Option<String>,
}

impl Filter {
    pub fn new(year: Option<String>, semester: Option<String>) -> Self {
        Self { year, semester }
    }

    pub fn semester(year: &str, semester: &str) -> Self {
        Self::new(Some(year.to_string()), Some(semester.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.semester.is_none()
    }

    pub fn matches(&self, year: &str, semester: &str) -> bool {
        self.year.as_deref().is_none_or(|y| y == year)
            && self.semester.as_deref().is_none_or(|s| s == semester)
    }
}

/// A `(year, semester)` pair present in the data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Semester {
    pub year: String,
    pub semester: String,
}

impl Semester {
    /// Human heading, e.g. `Spring 2024`.
    pub fn title(&self) -> String {
        format!("{} {}", capitalize(&self.semester), self.year)
    }

    /// Markdown anchor of the semester heading, e.g. `spring-2024`.
    pub fn anchor(&self) -> String {
        format!("{}-{}", self.semester, self.year).to_lowercase()
    }

    fn season_order(&self) -> u8 {
        match self.semester.to_lowercase().as_str() {
            "spring" => 0,
            "summer" => 1,
            "fall" => 2,
            _ => 3,
        }
    }
}

/// All records loaded from a data directory, plus the data files they came from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    files: Vec<FileInfo>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(files: Vec<FileInfo>, records: Vec<Record>) -> Self {
        Self { files, records }
    }

    /// Loads every `*.csv` in `dir` (non-recursive) whose name parses and passes `filter`.
    ///
    /// Files with unparseable names are skipped silently. Any load failure
    /// aborts the whole assembly.
    pub fn load(dir: &Path, filter: &Filter) -> Result<Self> {
        let mut files = Vec::new();
        let mut records = Vec::new();

        for path in list_csv_files(dir)? {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(info) = parse_filename(file_name) else {
                debug!(file = file_name, "Skipping file with unrecognised name");
                continue;
            };
            if !filter.matches(&info.year, &info.semester) {
                continue;
            }

            let rows = load_csv(&path)?;
            records.extend(rows.into_iter().map(|r| r.with_file_info(&info)));
            files.push(info);
        }

        info!(
            dir = %dir.display(),
            files = files.len(),
            records = records.len(),
            "Dataset loaded"
        );
        Ok(Self { files, records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn files(&self) -> &[FileInfo] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The subset of files and records matching `filter`, in the original order.
    pub fn filtered(&self, filter: &Filter) -> Dataset {
        Dataset {
            files: self
                .files
                .iter()
                .filter(|f| filter.matches(&f.year, &f.semester))
                .cloned()
                .collect(),
            records: self
                .records
                .iter()
                .filter(|r| filter.matches(&r.year, &r.semester))
                .cloned()
                .collect(),
        }
    }

    /// Distinct semesters of the loaded files: newest year first, then
    /// spring, summer, fall, anything else.
    pub fn semesters(&self) -> Vec<Semester> {
        let distinct: BTreeSet<Semester> = self
            .files
            .iter()
            .map(|f| Semester {
                year: f.year.clone(),
                semester: f.semester.clone(),
            })
            .collect();

        let mut semesters: Vec<Semester> = distinct.into_iter().collect();
        // non-numeric years go last
        semesters.sort_by_key(|s| {
            (
                s.year.parse::<i64>().map_or((1, 0), |y| (0, -y)),
                s.season_order(),
            )
        });
        semesters
    }

    /// Distinct university identifiers of the records, sorted.
    pub fn universities(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.records.iter().map(|r| r.university.as_str()).collect();
        distinct.into_iter().map(str::to_string).collect()
    }
}

/// Paths of the `*.csv` files directly inside `dir`, in directory listing order.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        if !path.is_file() {
            continue;
        }
        paths.push(path);
    }

    Ok(paths)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
