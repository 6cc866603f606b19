//! marker-trace - plot rigid-body marker trajectories from a capture take.

use clap::Parser;
use marker_trace::render::{PlotConfig, TrajectoryPlot};
use marker_trace::{pipeline, CaptureLayout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marker-trace")]
#[command(about = "Extract and plot rigid-body marker trajectories from a capture take")]
struct Args {
    /// Capture CSV export
    #[arg(long, default_value = "./data/Take 2025-05-14 05.25.51 PM.csv")]
    file: PathBuf,

    /// Marker label prefix selecting the rigid body
    #[arg(long, default_value = "robot_link:Marker")]
    prefix: String,

    /// Zero-based row holding the per-column marker labels
    #[arg(long = "name_row", default_value_t = 3)]
    name_row: usize,

    /// Rows before the numeric data region
    #[arg(long, default_value_t = 7)]
    skiprows: usize,

    /// Output image path
    #[arg(long, default_value = "trajectory.svg")]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> marker_trace::Result<()> {
    let layout = CaptureLayout::default()
        .with_name_row(args.name_row)
        .with_data_start(args.skiprows);

    let capture = pipeline::run(&args.file, &args.prefix, &layout)?;

    TrajectoryPlot::new(&capture, PlotConfig::default())
        .with_title("Trajectory")
        .save(&args.output)?;

    let duration = capture.time.last().copied().unwrap_or(0.0);
    println!("Markers tracked:  {}", capture.marker_count());
    println!("Frames retained:  {}", capture.frame_count());
    println!("Capture duration: {:.2} s", duration);
    println!("Figure saved to   {}", args.output.display());

    Ok(())
}
