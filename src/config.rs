//! Capture file layout configuration
//!
//! Optical tracking exports carry a fixed header region: a few free-form
//! metadata rows, one row of per-column marker labels, then column titles and
//! numeric samples. The two row offsets vary between rig software versions,
//! so they are configurable here with the vendor defaults.

use serde::{Deserialize, Serialize};

/// Row layout of a capture CSV export
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaptureLayout {
    /// Zero-based index of the row holding per-column marker labels
    pub name_row_idx: usize,
    /// Number of rows before the data region (column titles + samples) begins
    pub data_start_row: usize,
}

impl Default for CaptureLayout {
    fn default() -> Self {
        Self {
            name_row_idx: 3,
            data_start_row: 7,
        }
    }
}

impl CaptureLayout {
    /// Layout with a different label row index
    pub fn with_name_row(mut self, name_row_idx: usize) -> Self {
        self.name_row_idx = name_row_idx;
        self
    }

    /// Layout with a different data region start
    pub fn with_data_start(mut self, data_start_row: usize) -> Self {
        self.data_start_row = data_start_row;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = CaptureLayout::default();
        assert_eq!(layout.name_row_idx, 3);
        assert_eq!(layout.data_start_row, 7);
    }

    #[test]
    fn test_builder_setters() {
        let layout = CaptureLayout::default().with_name_row(1).with_data_start(4);
        assert_eq!(layout.name_row_idx, 1);
        assert_eq!(layout.data_start_row, 4);
    }
}
