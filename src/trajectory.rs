//! Trajectory tensor assembly.

use crate::io::table::{Cell, DataTable};
use crate::markers::MarkerColumns;

/// One marker's positions over time.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTrajectory {
    /// Marker identifier
    pub id: String,
    /// Frame-indexed positions; a component is `None` where the sample is missing
    pub points: Vec<[Option<f64>; 3]>,
}

/// The (marker, frame, axis) trajectory tensor.
///
/// Markers are ordered as first encountered in the label row. Every track has
/// `frame_count` points.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySet {
    /// Per-marker tracks
    pub markers: Vec<MarkerTrajectory>,
    frame_count: usize,
}

impl TrajectorySet {
    /// Number of markers in the tensor.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Frames per track.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// True when no marker survived extraction.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Convert column triplets into per-marker tracks.
///
/// A triplet whose columns contain non-numeric text (or that points past the
/// table edge) cannot be coerced: the whole marker is skipped with a logged
/// diagnostic and contributes no partial data. Missing samples within a
/// numeric column stay `None` and flow through to the centroid stage.
pub fn extract_trajectories(table: &DataTable, groups: &[MarkerColumns]) -> TrajectorySet {
    let mut markers = Vec::with_capacity(groups.len());

    'groups: for group in groups {
        let mut axes: Vec<&[Cell]> = Vec::with_capacity(3);
        for &col_idx in &group.cols {
            let Some(column) = table.column(col_idx) else {
                log::warn!(
                    "skipping marker {:?}: column {} is out of range",
                    group.id,
                    col_idx
                );
                continue 'groups;
            };
            let text_cell = column.iter().enumerate().find_map(|(frame, cell)| match cell {
                Cell::Text(raw) => Some((frame, raw)),
                _ => None,
            });
            if let Some((frame, raw)) = text_cell {
                log::warn!(
                    "skipping marker {:?}: non-numeric value {:?} in column {} (frame {})",
                    group.id,
                    raw,
                    col_idx,
                    frame
                );
                continue 'groups;
            }
            axes.push(column);
        }

        let points = (0..table.frame_count())
            .map(|f| [axes[0][f].as_value(), axes[1][f].as_value(), axes[2][f].as_value()])
            .collect();
        markers.push(MarkerTrajectory {
            id: group.id.clone(),
            points,
        });
    }

    TrajectorySet {
        markers,
        frame_count: table.frame_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[Option<f64>]) -> Vec<Cell> {
        values
            .iter()
            .map(|v| match v {
                Some(x) => Cell::Value(*x),
                None => Cell::Empty,
            })
            .collect()
    }

    fn group(id: &str, start: usize) -> MarkerColumns {
        MarkerColumns {
            id: id.to_string(),
            cols: [start, start + 1, start + 2],
        }
    }

    #[test]
    fn test_extracts_points_per_frame() {
        let table = DataTable::new(
            vec![0.0, 0.1],
            vec![
                cells(&[Some(0.0), Some(0.1)]),
                cells(&[Some(1.0), Some(2.0)]),
                cells(&[Some(3.0), Some(4.0)]),
                cells(&[Some(5.0), Some(6.0)]),
            ],
        );

        let set = extract_trajectories(&table, &[group("M:1", 1)]);
        assert_eq!(set.marker_count(), 1);
        assert_eq!(set.frame_count(), 2);
        assert_eq!(set.markers[0].points[0], [Some(1.0), Some(3.0), Some(5.0)]);
        assert_eq!(set.markers[0].points[1], [Some(2.0), Some(4.0), Some(6.0)]);
    }

    #[test]
    fn test_missing_samples_stay_none() {
        let table = DataTable::new(
            vec![0.0],
            vec![
                cells(&[Some(0.0)]),
                cells(&[None]),
                cells(&[Some(3.0)]),
                cells(&[Some(5.0)]),
            ],
        );

        let set = extract_trajectories(&table, &[group("M:1", 1)]);
        assert_eq!(set.markers[0].points[0], [None, Some(3.0), Some(5.0)]);
    }

    #[test]
    fn test_text_cell_skips_whole_marker_but_not_others() {
        let mut poisoned = cells(&[Some(1.0), Some(2.0)]);
        poisoned[1] = Cell::Text("jitter".to_string());

        let table = DataTable::new(
            vec![0.0, 0.1],
            vec![
                cells(&[Some(0.0), Some(0.1)]),
                poisoned,
                cells(&[Some(3.0), Some(4.0)]),
                cells(&[Some(5.0), Some(6.0)]),
                cells(&[Some(7.0), Some(8.0)]),
                cells(&[Some(9.0), Some(10.0)]),
                cells(&[Some(11.0), Some(12.0)]),
            ],
        );

        let set = extract_trajectories(&table, &[group("M:bad", 1), group("M:good", 4)]);
        assert_eq!(set.marker_count(), 1);
        assert_eq!(set.markers[0].id, "M:good");
        assert_eq!(set.frame_count(), 2);
    }

    #[test]
    fn test_out_of_range_triplet_is_skipped() {
        let table = DataTable::new(vec![0.0], vec![cells(&[Some(0.0)])]);

        let set = extract_trajectories(&table, &[group("M:1", 5)]);
        assert!(set.is_empty());
        assert_eq!(set.frame_count(), 1);
    }
}
