//! Centroid series and valid-frame filtering.
//!
//! The centroid of the rigid body is the per-frame mean of its marker
//! positions. Missingness propagates component-wise: one missing marker
//! component at an axis makes the centroid component at that axis missing,
//! and any missing centroid component invalidates the whole frame. The mask
//! trims trajectories, centroid, and time in lock-step so downstream
//! consumers never see diverging frame counts.

use crate::trajectory::TrajectorySet;

/// One marker's positions over the retained frames only.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTrack {
    /// Marker identifier
    pub id: String,
    /// Fully populated positions, one per retained frame
    pub points: Vec<[f64; 3]>,
}

/// The pipeline's final artifact: tracks, centroid, and time trimmed to the
/// frames where every marker was observed.
///
/// Invariant: every track, the centroid, and the time axis share one frame
/// count and frame-index correspondence.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCapture {
    /// Per-marker tracks
    pub markers: Vec<FilteredTrack>,
    /// Per-frame body centroid
    pub centroid: Vec<[f64; 3]>,
    /// Elapsed seconds per frame, starting at zero
    pub time: Vec<f64>,
}

impl FilteredCapture {
    /// Number of markers.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Number of retained frames.
    pub fn frame_count(&self) -> usize {
        self.centroid.len()
    }
}

/// Per-frame mean position across the marker axis.
///
/// For each (frame, axis): `None` if any marker's component is missing there,
/// otherwise the arithmetic mean over all markers. The mean is never
/// re-weighted around a hole; a hole invalidates the component outright.
pub fn centroid_series(set: &TrajectorySet) -> Vec<[Option<f64>; 3]> {
    let marker_count = set.marker_count();

    (0..set.frame_count())
        .map(|frame| {
            let mut out = [None; 3];
            for (axis, slot) in out.iter_mut().enumerate() {
                let mut sum = 0.0;
                let mut complete = marker_count > 0;
                for track in &set.markers {
                    match track.points[frame][axis] {
                        Some(v) => sum += v,
                        None => {
                            complete = false;
                            break;
                        }
                    }
                }
                if complete {
                    *slot = Some(sum / marker_count as f64);
                }
            }
            out
        })
        .collect()
}

/// True where all three centroid components are present.
pub fn valid_frame_mask(centroid: &[[Option<f64>; 3]]) -> Vec<bool> {
    centroid
        .iter()
        .map(|c| c.iter().all(|component| component.is_some()))
        .collect()
}

/// A frame kept by the mask has every component present.
fn complete(point: &[Option<f64>; 3]) -> [f64; 3] {
    [
        point[0].unwrap_or(0.0),
        point[1].unwrap_or(0.0),
        point[2].unwrap_or(0.0),
    ]
}

/// Trim tracks, centroid, and time to the masked frames, in lock-step.
pub fn apply_mask(
    set: &TrajectorySet,
    centroid: &[[Option<f64>; 3]],
    time: &[f64],
    mask: &[bool],
) -> FilteredCapture {
    let keep = |frame: &usize| mask.get(*frame).copied().unwrap_or(false);

    let markers = set
        .markers
        .iter()
        .map(|track| FilteredTrack {
            id: track.id.clone(),
            points: (0..track.points.len())
                .filter(keep)
                .map(|frame| complete(&track.points[frame]))
                .collect(),
        })
        .collect();

    FilteredCapture {
        markers,
        centroid: (0..centroid.len())
            .filter(keep)
            .map(|frame| complete(&centroid[frame]))
            .collect(),
        time: (0..time.len())
            .filter(keep)
            .map(|frame| time[frame])
            .collect(),
    }
}
