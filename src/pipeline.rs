//! End-to-end extraction pipeline.
//!
//! One synchronous pass: label row → data table → column triplets →
//! trajectory tensor → centroid → valid-frame trim. All fatal conditions
//! surface here as [`Error`](crate::error::Error); per-marker problems are
//! logged and skipped inside the stages.

use crate::centroid::{apply_mask, centroid_series, valid_frame_mask, FilteredCapture};
use crate::config::CaptureLayout;
use crate::error::{Error, Result};
use crate::io::header::read_label_row;
use crate::io::table::load_table;
use crate::markers::group_marker_columns;
use crate::trajectory::extract_trajectories;
use std::path::Path;

/// Run the full pipeline over one capture file.
///
/// Returns the filtered capture: marker tracks, centroid series, and time
/// axis trimmed to the frames where every marker was observed.
pub fn run(path: &Path, prefix: &str, layout: &CaptureLayout) -> Result<FilteredCapture> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    log::info!("reading capture {}", path.display());
    let labels = read_label_row(path, layout.name_row_idx)?;
    let table = load_table(path, layout.data_start_row)?;
    log::info!(
        "loaded {} frames x {} columns",
        table.frame_count(),
        table.column_count()
    );

    let groups = group_marker_columns(&labels, table.column_count(), prefix);
    log::info!("matched {} marker triplets with prefix {:?}", groups.len(), prefix);

    let set = extract_trajectories(&table, &groups);
    if set.is_empty() {
        return Err(Error::NoValidTrajectories {
            prefix: prefix.to_string(),
        });
    }

    let centroid = centroid_series(&set);
    let mask = valid_frame_mask(&centroid);
    let retained = mask.iter().filter(|&&keep| keep).count();
    log::info!("{} of {} frames fully observed", retained, mask.len());

    Ok(apply_mask(&set, &centroid, table.time(), &mask))
}
