use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::FileInfo;

/// Columns owned by the filename; body cells with these names are discarded.
const STAMPED_COLUMNS: [&str; 4] = ["year", "semester", "university", "source_file"];

/// One benchmark submission row.
///
/// The five known metrics are typed; every other column from the CSV body
/// is kept verbatim in `extra`, except the ones stamped from the filename.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub team_name: String,
    pub year: String,
    pub semester: String,
    pub university: String,
    pub source_file: String,

    // metrics
    pub ipc: Option<f64>,
    pub cycle_count: Option<f64>,
    pub frequency_mhz: Option<f64>,
    pub area_mm2: Option<f64>,
    pub power_mw: Option<f64>,

    pub extra: BTreeMap<String, String>,
}

impl Record {
    pub fn new(team_name: &str) -> Self {
        Record {
            team_name: team_name.to_string(),
            ..Default::default()
        }
    }

    /// Stamp the filename-derived metadata, overwriting any body columns of the same name.
    pub fn with_file_info(mut self, info: &FileInfo) -> Self {
        self.year = info.year.clone();
        self.semester = info.semester.clone();
        self.university = info.university.clone();
        self.source_file = info.full_name.clone();
        for column in STAMPED_COLUMNS {
            self.extra.remove(column);
        }
        self
    }
}
