//! Error types for marker-trace

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// marker-trace error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Capture file path does not exist
    #[error("capture file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV record error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Label row index exceeds the file length
    #[error("label row {index} not found: file has only {rows} rows")]
    HeaderNotFound {
        /// Requested zero-based row index
        index: usize,
        /// Rows actually present in the file
        rows: usize,
    },

    /// Every row was dropped during time coercion
    #[error("no rows with a parsable time value after row {data_start_row}")]
    EmptyTimeSeries {
        /// First row of the data region
        data_start_row: usize,
    },

    /// No marker survived prefix matching and coercion
    #[error("no valid trajectories for marker prefix {prefix:?}")]
    NoValidTrajectories {
        /// The prefix that matched nothing usable
        prefix: String,
    },
}
