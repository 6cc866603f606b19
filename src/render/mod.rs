//! Figure rendering
//!
//! Presentation only: consumes the filtered capture and draws it. Nothing in
//! here feeds back into the extraction pipeline.

pub mod svg;

pub use svg::{PlotColorScheme, PlotConfig, TrajectoryPlot};
