//! Label row extraction from the capture header region.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;

/// Read the ordered sequence of per-column labels at `name_row_idx`.
///
/// Rows are counted by physical line, zero-based. The row is returned as one
/// string per column, time column included. A blank line at the requested
/// index yields an empty label row.
///
/// # Errors
///
/// [`Error::FileNotFound`] if the path does not exist,
/// [`Error::HeaderNotFound`] if the file holds fewer rows than requested.
pub fn read_label_row(path: &Path, name_row_idx: usize) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    // The csv reader does not yield records for blank lines, so track the
    // physical line of each record instead of counting records.
    let target_line = name_row_idx as u64 + 1;
    let mut last_line = 0u64;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if line == target_line {
            return Ok(record.iter().map(|s| s.to_string()).collect());
        }
        if line > target_line {
            // The requested row was a blank separator line: no labels.
            return Ok(Vec::new());
        }
        last_line = line;
    }

    Err(Error::HeaderNotFound {
        index: name_row_idx,
        rows: last_line as usize,
    })
}
