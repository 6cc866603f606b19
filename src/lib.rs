//! # marker-trace
//!
//! Marker trajectory extraction and visualization for optical motion-capture
//! takes.
//!
//! ## Overview
//!
//! A capture CSV export carries a metadata header (one row of which labels
//! every column with its marker's identifier) followed by a numeric data
//! region: elapsed seconds in column 0, then consecutive X/Y/Z column
//! triples per marker channel. marker-trace reconstructs from this:
//!
//! - one 3D trajectory per marker matching a name prefix,
//! - the rigid body's centroid ("center of mass") over time,
//! - a trimmed view keeping only frames where every marker was observed,
//!
//! and renders the result as an SVG figure with the body's shape at the
//! start and end of the take.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marker_trace::{pipeline, CaptureLayout};
//! use marker_trace::render::{PlotConfig, TrajectoryPlot};
//!
//! let capture = pipeline::run(
//!     "take.csv".as_ref(),
//!     "robot_link:Marker",
//!     &CaptureLayout::default(),
//! )?;
//! TrajectoryPlot::new(&capture, PlotConfig::default())
//!     .with_title("Trajectory")
//!     .save("trajectory.svg".as_ref())?;
//! ```

// Centroid series and valid-frame filtering
pub mod centroid;

// Capture layout configuration
pub mod config;

// Error types
pub mod error;

// Capture file input (label row + data table)
pub mod io;

// Marker column grouping
pub mod markers;

// End-to-end orchestration
pub mod pipeline;

// SVG figure rendering
pub mod render;

// Trajectory tensor assembly
pub mod trajectory;

// Re-export commonly used types
pub use centroid::{apply_mask, centroid_series, valid_frame_mask, FilteredCapture, FilteredTrack};
pub use config::CaptureLayout;
pub use error::{Error, Result};
pub use io::{load_table, read_label_row, Cell, DataTable};
pub use markers::{group_marker_columns, MarkerColumns};
pub use trajectory::{extract_trajectories, MarkerTrajectory, TrajectorySet};
