//! SVG rendering of marker trajectories.
//!
//! Renders the filtered capture to a single SVG figure:
//! - One polyline per marker trajectory
//! - The body centroid path
//! - Translucent polygons through the marker positions at the first and last
//!   retained frame (start/end body shape)
//! - Title and legend
//!
//! Points are projected orthographically from 3D with a configurable
//! azimuth/elevation view angle, then fitted to the viewport.

use crate::centroid::FilteredCapture;
use std::fmt::Write;
use std::path::Path;

/// Colorblind-friendly marker palette (Okabe-Ito), cycled per marker.
const MARKER_PALETTE: [&str; 8] = [
    "#0072B2", "#E69F00", "#009E73", "#56B4E9", "#D55E00", "#CC79A7", "#F0E442", "#999999",
];

/// Colors for the non-marker figure elements
#[derive(Clone, Debug)]
pub struct PlotColorScheme {
    /// Centroid path color
    pub centroid: &'static str,
    /// Start-shape polygon fill
    pub start_shape: &'static str,
    /// End-shape polygon fill
    pub end_shape: &'static str,
    /// Figure background
    pub background: &'static str,
    /// Title and legend text
    pub text: &'static str,
}

impl Default for PlotColorScheme {
    fn default() -> Self {
        Self {
            centroid: "#000000",
            start_shape: "#22AA22",
            end_shape: "#AA2222",
            background: "#F8F8F8",
            text: "#333333",
        }
    }
}

/// Configuration for the trajectory figure
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Plot area width in pixels
    pub width: f64,
    /// Plot area height in pixels
    pub height: f64,
    /// Padding around the plot area in pixels
    pub margin: f64,
    /// View azimuth in degrees (rotation about the vertical axis)
    pub azimuth_deg: f64,
    /// View elevation in degrees above the horizontal plane
    pub elevation_deg: f64,
    /// Marker trajectory stroke width
    pub line_width: f64,
    /// Centroid path stroke width
    pub centroid_width: f64,
    /// Start/end shape fill opacity
    pub shape_opacity: f64,
    /// Color scheme
    pub colors: PlotColorScheme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            margin: 40.0,
            azimuth_deg: -60.0,
            elevation_deg: 30.0,
            line_width: 1.5,
            centroid_width: 3.0,
            shape_opacity: 0.3,
            colors: PlotColorScheme::default(),
        }
    }
}

/// Trajectory figure builder
pub struct TrajectoryPlot<'a> {
    capture: &'a FilteredCapture,
    config: PlotConfig,
    title: Option<String>,
}

impl<'a> TrajectoryPlot<'a> {
    /// Create a new plot over a filtered capture
    pub fn new(capture: &'a FilteredCapture, config: PlotConfig) -> Self {
        Self {
            capture,
            config,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Project a 3D point onto the view plane (unscaled).
    fn project(&self, point: [f64; 3]) -> (f64, f64) {
        let az = self.config.azimuth_deg.to_radians();
        let el = self.config.elevation_deg.to_radians();
        let [x, y, z] = point;

        let u = x * az.cos() + y * az.sin();
        let depth = -x * az.sin() + y * az.cos();
        let v = z * el.cos() - depth * el.sin();
        (u, v)
    }

    /// Render to an SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        let cfg = &self.config;

        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        // One legend line per marker, plus centroid and the two shapes.
        let legend_entries = self.capture.marker_count() + 3;
        let legend_height = legend_entries as f64 * 18.0 + 16.0;

        let total_width = cfg.width;
        let total_height = cfg.height + title_height + legend_height;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            total_width, total_height, total_width, total_height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            cfg.colors.background
        )
        .unwrap();

        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r#"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
                total_width / 2.0,
                cfg.colors.text,
                title
            )
            .unwrap();
        }

        writeln!(&mut svg, r#"  <g transform="translate(0, {:.0})">"#, title_height).unwrap();
        self.render_plot(&mut svg);
        writeln!(&mut svg, "  </g>").unwrap();

        self.render_legend(&mut svg, title_height + cfg.height);

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    /// Fit projected coordinates to the plot area and draw everything.
    fn render_plot(&self, svg: &mut String) {
        let cfg = &self.config;

        // Bounds over every drawn point: marker tracks plus centroid.
        let mut min_u = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;
        let mut min_v = f64::INFINITY;
        let mut max_v = f64::NEG_INFINITY;
        let all_points = self
            .capture
            .markers
            .iter()
            .flat_map(|t| t.points.iter())
            .chain(self.capture.centroid.iter());
        for &point in all_points {
            let (u, v) = self.project(point);
            min_u = min_u.min(u);
            max_u = max_u.max(u);
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }

        if min_u > max_u {
            // Nothing to draw.
            return;
        }

        let span_u = (max_u - min_u).max(1e-9);
        let span_v = (max_v - min_v).max(1e-9);
        let avail_w = cfg.width - 2.0 * cfg.margin;
        let avail_h = cfg.height - 2.0 * cfg.margin;
        let scale = (avail_w / span_u).min(avail_h / span_v);

        // Center the fitted drawing; SVG y grows downward.
        let offset_x = cfg.margin + (avail_w - span_u * scale) / 2.0;
        let offset_y = cfg.margin + (avail_h - span_v * scale) / 2.0;
        let to_px = |point: [f64; 3]| {
            let (u, v) = self.project(point);
            (
                offset_x + (u - min_u) * scale,
                offset_y + (max_v - v) * scale,
            )
        };

        // Start/end body shapes underneath the trajectories.
        let first: Vec<[f64; 3]> = self
            .capture
            .markers
            .iter()
            .filter_map(|t| t.points.first().copied())
            .collect();
        let last: Vec<[f64; 3]> = self
            .capture
            .markers
            .iter()
            .filter_map(|t| t.points.last().copied())
            .collect();
        self.render_shape(svg, &first, cfg.colors.start_shape, "start-shape", &to_px);
        self.render_shape(svg, &last, cfg.colors.end_shape, "end-shape", &to_px);

        for (i, track) in self.capture.markers.iter().enumerate() {
            let color = MARKER_PALETTE[i % MARKER_PALETTE.len()];
            self.render_polyline(svg, &track.points, color, cfg.line_width, 0.6, &to_px);
        }

        self.render_polyline(
            svg,
            &self.capture.centroid,
            cfg.colors.centroid,
            cfg.centroid_width,
            1.0,
            &to_px,
        );
    }

    fn render_polyline(
        &self,
        svg: &mut String,
        points: &[[f64; 3]],
        color: &str,
        width: f64,
        opacity: f64,
        to_px: &dyn Fn([f64; 3]) -> (f64, f64),
    ) {
        if points.is_empty() {
            return;
        }

        let mut attr = String::new();
        for &point in points {
            let (x, y) = to_px(point);
            write!(&mut attr, "{:.1},{:.1} ", x, y).unwrap();
        }

        writeln!(
            svg,
            r#"    <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" opacity="{}"/>"#,
            attr.trim_end(),
            color,
            width,
            opacity
        )
        .unwrap();
    }

    fn render_shape(
        &self,
        svg: &mut String,
        points: &[[f64; 3]],
        color: &str,
        id: &str,
        to_px: &dyn Fn([f64; 3]) -> (f64, f64),
    ) {
        if points.len() < 3 {
            return;
        }

        let mut attr = String::new();
        for &point in points {
            let (x, y) = to_px(point);
            write!(&mut attr, "{:.1},{:.1} ", x, y).unwrap();
        }

        writeln!(
            svg,
            r##"    <polygon id="{}" points="{}" fill="{}" opacity="{}" stroke="#000000" stroke-width="1"/>"##,
            id,
            attr.trim_end(),
            color,
            self.config.shape_opacity
        )
        .unwrap();
    }

    /// Render the legend below the plot area
    fn render_legend(&self, svg: &mut String, y_offset: f64) {
        let cfg = &self.config;

        writeln!(
            svg,
            r#"  <g font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )
        .unwrap();

        let mut entry_y = 14.0;
        let mut line_entry = |svg: &mut String, color: &str, width: f64, label: &str| {
            writeln!(
                svg,
                r#"    <line x1="20" y1="{:.0}" x2="50" y2="{:.0}" stroke="{}" stroke-width="{}"/>"#,
                entry_y, entry_y, color, width
            )
            .unwrap();
            writeln!(
                svg,
                r#"    <text x="60" y="{:.0}" fill="{}">{}</text>"#,
                entry_y + 4.0,
                cfg.colors.text,
                label
            )
            .unwrap();
            entry_y += 18.0;
        };

        for i in 0..self.capture.marker_count() {
            let color = MARKER_PALETTE[i % MARKER_PALETTE.len()];
            line_entry(svg, color, cfg.line_width, &format!("Marker {}", i + 1));
        }
        line_entry(svg, cfg.colors.centroid, cfg.centroid_width, "Center of Mass");

        for (color, label) in [
            (cfg.colors.start_shape, "Start Shape"),
            (cfg.colors.end_shape, "End Shape"),
        ] {
            writeln!(
                svg,
                r##"    <rect x="28" y="{:.0}" width="15" height="10" fill="{}" opacity="{}" stroke="#000000"/>"##,
                entry_y - 7.0,
                color,
                cfg.shape_opacity
            )
            .unwrap();
            writeln!(
                svg,
                r#"    <text x="60" y="{:.0}" fill="{}">{}</text>"#,
                entry_y + 4.0,
                cfg.colors.text,
                label
            )
            .unwrap();
            entry_y += 18.0;
        }

        writeln!(svg, "  </g>").unwrap();
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::write(path, self.render())
    }
}
