//! Reads one benchmark CSV into [`Record`]s.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{Error, Result};
use crate::metrics::MetricKey;
use crate::record::Record;

const TEAM_NAME: &str = "team_name";

/// Loads every row of `path`.
///
/// Metric columns are parsed as `f64`; a blank cell means "no value".
/// A non-blank cell that is not a finite number fails the whole load.
/// Unknown columns are kept as strings in [`Record::extra`].
pub fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = rdr
        .headers()
        .map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    if !headers.iter().any(|h| h == TEAM_NAME) {
        return Err(Error::MissingColumn {
            path: path.to_path_buf(),
            column: TEAM_NAME.to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(to_record(path, &headers, &row)?);
    }

    debug!(path = %path.display(), rows = rows.len(), "Loaded CSV");
    Ok(rows)
}

fn to_record(path: &Path, headers: &StringRecord, row: &StringRecord) -> Result<Record> {
    let mut record = Record::default();

    for (i, column) in headers.iter().enumerate() {
        let cell = row.get(i).unwrap_or("");

        if column == TEAM_NAME {
            record.team_name = cell.to_string();
        } else if let Some(key) = MetricKey::from_column(column) {
            *key.slot(&mut record) = parse_metric(path, row, column, cell)?;
        } else {
            record.extra.insert(column.to_string(), cell.to_string());
        }
    }

    Ok(record)
}

fn parse_metric(path: &Path, row: &StringRecord, column: &str, cell: &str) -> Result<Option<f64>> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // NaN and infinities parse but cannot be ranked or formatted
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(Error::InvalidNumber {
            path: path.to_path_buf(),
            line: row.position().map(|p| p.line()).unwrap_or(0),
            column: column.to_string(),
            value: cell.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_parses_metrics_and_blanks() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "2024-spring-mit.csv",
            "team_name,ipc,cycle_count,notes\nTeamA,1.5,,fast\nTeamB, 0.9 ,12000,\n",
        );

        let rows = load_csv(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team_name, "TeamA");
        assert_eq!(rows[0].ipc, Some(1.5));
        assert_eq!(rows[0].cycle_count, None);
        assert_eq!(rows[0].extra.get("notes").map(String::as_str), Some("fast"));
        assert_eq!(rows[1].ipc, Some(0.9));
        assert_eq!(rows[1].cycle_count, Some(12000.0));
    }

    #[test]
    fn test_missing_metric_column_is_absent() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "a-b-c.csv", "team_name\nSolo\n");

        let rows = load_csv(&path).unwrap();

        assert_eq!(rows.len(), 1);
        assert!(MetricKey::ALL.iter().all(|k| k.value(&rows[0]).is_none()));
    }

    #[test]
    fn test_invalid_number_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "a-b-c.csv", "team_name,power_mw\nTeamA,12\nTeamB,lots\n");

        let err = load_csv(&path).unwrap_err();

        match err {
            Error::InvalidNumber {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "power_mw");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_team_name_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "a-b-c.csv", "team,ipc\nTeamA,1.0\n");

        assert!(matches!(
            load_csv(&path),
            Err(Error::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_non_finite_numbers_are_errors() {
        let dir = TempDir::new().unwrap();
        for (name, cell) in [("nan", "NaN"), ("inf", "inf"), ("neg", "-infinity"), ("huge", "1e400")] {
            let path = write_csv(
                &dir,
                &format!("2024-spring-{name}.csv"),
                &format!("team_name,ipc,cycle_count\nGood,1.9,1000\nBad,1.0,{cell}\n"),
            );

            match load_csv(&path) {
                Err(Error::InvalidNumber { line, column, value, .. }) => {
                    assert_eq!(line, 3);
                    assert_eq!(column, "cycle_count");
                    assert_eq!(value, cell);
                }
                other => panic!("expected InvalidNumber for {cell}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_short_row_treated_as_blank() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "a-b-c.csv", "team_name,ipc,power_mw\nTeamA,1.1\n");

        let rows = load_csv(&path).unwrap();

        assert_eq!(rows[0].ipc, Some(1.1));
        assert_eq!(rows[0].power_mw, None);
    }
}
