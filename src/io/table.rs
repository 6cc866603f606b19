//! Numeric data region loading.
//!
//! The data region starts at a fixed row offset and leads with a column-title
//! row whose time cell is textual; the unparsable-time rule drops it along
//! with any other row that has no usable time value, which keeps time and
//! sample data aligned without special-casing the title row.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;

/// One table cell, with missingness kept explicit.
///
/// `Empty` is a missing sample (blank field or a literal NaN). `Text` is
/// content that is not a number at all; a marker column containing `Text`
/// cannot be coerced and poisons its whole triplet at extraction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Parsed numeric value
    Value(f64),
    /// Missing sample
    Empty,
    /// Non-numeric content, kept verbatim for diagnostics
    Text(String),
}

impl Cell {
    /// Parse a raw CSV field.
    pub fn parse(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Empty,
            Ok(v) => Cell::Value(v),
            Err(_) => Cell::Text(field.to_string()),
        }
    }

    /// Numeric value, if present.
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Cell::Value(v) => Some(*v),
            Cell::Empty | Cell::Text(_) => None,
        }
    }

    /// Is this cell non-numeric text?
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }
}

/// Column-major table of the capture's data region.
///
/// Invariant: every column has one cell per retained row, and the time axis
/// has the same length. Column 0 is the (raw) time column; the parsed,
/// rebased time lives in the separate axis.
#[derive(Debug, Clone)]
pub struct DataTable {
    time: Vec<f64>,
    columns: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Build a table from parts. All columns must match the time length.
    pub fn new(time: Vec<f64>, columns: Vec<Vec<Cell>>) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == time.len()));
        Self { time, columns }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of retained rows.
    pub fn frame_count(&self) -> usize {
        self.time.len()
    }

    /// Rebased time axis, seconds, starting at zero.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Cells of one column, row-ordered.
    pub fn column(&self, idx: usize) -> Option<&[Cell]> {
        self.columns.get(idx).map(|c| c.as_slice())
    }
}

/// Parse a time field. Text and literal NaN both count as unusable.
fn parse_time(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|t| !t.is_nan())
}

/// Load the data region beginning at row `data_start_row`.
///
/// The first row of the region fixes the column count; rows whose time cell
/// (column 0) is unusable are dropped entirely, short rows are padded with
/// missing cells and long rows truncated. Time is rebased so the first
/// retained row reads zero.
///
/// # Errors
///
/// [`Error::FileNotFound`] if the path does not exist,
/// [`Error::EmptyTimeSeries`] if no rows survive the time coercion.
pub fn load_table(path: &Path, data_start_row: usize) -> Result<DataTable> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut columns: Vec<Vec<Cell>> = Vec::new();
    let mut column_count: Option<usize> = None;
    let mut time = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if (line as usize) <= data_start_row {
            // Header/metadata region.
            continue;
        }

        let width = *column_count.get_or_insert_with(|| {
            columns = vec![Vec::new(); record.len()];
            record.len()
        });

        let Some(t) = record.get(0).and_then(parse_time) else {
            dropped += 1;
            continue;
        };

        time.push(t);
        for col in 0..width {
            let cell = record.get(col).map(Cell::parse).unwrap_or(Cell::Empty);
            columns[col].push(cell);
        }
    }

    if time.is_empty() {
        return Err(Error::EmptyTimeSeries { data_start_row });
    }

    if dropped > 0 {
        log::debug!("dropped {} rows without a usable time value", dropped);
    }

    let t0 = time[0];
    for t in &mut time {
        *t -= t0;
    }

    Ok(DataTable { time, columns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("take.csv");
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_cell_parse() {
        assert_eq!(Cell::parse("1.5"), Cell::Value(1.5));
        assert_eq!(Cell::parse(" -2 "), Cell::Value(-2.0));
        assert_eq!(Cell::parse(""), Cell::Empty);
        assert_eq!(Cell::parse("  "), Cell::Empty);
        assert_eq!(Cell::parse("NaN"), Cell::Empty);
        assert_eq!(Cell::parse("wobble"), Cell::Text("wobble".to_string()));
    }

    #[test]
    fn test_title_row_dropped_and_time_rebased() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "meta,0,0\nTime (Seconds),X,Y\n10.0,1.0,2.0\n10.1,3.0,4.0\n",
        );

        let table = load_table(&path, 1).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.frame_count(), 2);
        assert_eq!(table.time()[0], 0.0);
        assert!((table.time()[1] - 0.1).abs() < 1e-9);
        assert_eq!(table.column(1).unwrap()[0], Cell::Value(1.0));
        assert_eq!(table.column(2).unwrap()[1], Cell::Value(4.0));
    }

    #[test]
    fn test_rows_without_time_are_dropped_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "0.0,1.0\n,99.0\nNaN,98.0\n0.2,2.0\n");

        let table = load_table(&path, 0).unwrap();
        assert_eq!(table.frame_count(), 2);
        assert_eq!(table.column(1).unwrap().to_vec(), vec![
            Cell::Value(1.0),
            Cell::Value(2.0)
        ]);
    }

    #[test]
    fn test_short_rows_padded_long_rows_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "0.0,1.0,2.0\n0.1,5.0\n0.2,6.0,7.0,8.0\n");

        let table = load_table(&path, 0).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column(2).unwrap().to_vec(), vec![
            Cell::Value(2.0),
            Cell::Empty,
            Cell::Value(7.0)
        ]);
    }

    #[test]
    fn test_empty_time_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "meta,meta\nTime (Seconds),X\n");

        assert!(matches!(
            load_table(&path, 1),
            Err(Error::EmptyTimeSeries { data_start_row: 1 })
        ));
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        assert!(matches!(load_table(&path, 7), Err(Error::FileNotFound(_))));
    }
}
