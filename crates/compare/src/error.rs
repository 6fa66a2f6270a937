//! Error types for benchmark comparison.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, comparing, or persisting
/// benchmark results.
#[derive(Debug, Error)]
pub enum Error {
    /// An input document does not exist on disk.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An input document could not be read for a reason other than
    /// a missing path (permissions, I/O failure).
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An input document is not well-formed JSON. The source error
    /// carries the parser's line and column.
    #[error("invalid JSON in {}: {}", .path.display(), .source)]
    InvalidFormat {
        /// Path of the malformed document.
        path: PathBuf,
        /// Underlying parse error, including position information.
        source: serde_json::Error,
    },

    /// Neither document yielded a metric both sides could compare.
    #[error("no comparable metrics found")]
    NoComparableMetrics,

    /// At least one metric regressed beyond the configured threshold.
    #[error("{count} metric(s) regressed beyond the {threshold_pct:.1}% threshold")]
    RegressionDetected {
        /// Number of regressing metrics.
        count: usize,
        /// Threshold expressed as a percentage.
        threshold_pct: f64,
    },

    /// Writing the comparison snapshot failed.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        /// Destination path of the snapshot.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
