//! Benchmark comparison and regression detection for benchdiff.
//!
//! This crate compares two benchmark-result JSON documents (a baseline
//! and a current run) metric by metric and flags regressions that exceed
//! a fractional threshold.
//!
//! # Quick Start
//!
//! ```no_run
//! use benchdiff_compare::{check_regressions, compare, io, report};
//!
//! let baseline = io::load_document("baseline.json")?;
//! let current = io::load_document("current.json")?;
//!
//! // Compare every metric listed in the baseline
//! let comparisons = compare(&baseline, &current, None);
//! print!("{}", report::render(&comparisons));
//!
//! // Fail CI when any metric dropped by more than 5%
//! for regression in check_regressions(&comparisons, 0.05) {
//!     println!("  - {}", regression);
//! }
//! # Ok::<(), benchdiff_compare::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`extract`] - Metric-ratio extraction across the two document shapes
//! - [`comparison`] - The `MetricComparison`/`ComparisonSet` types and `compare`
//! - [`report`] - Fixed-width table rendering
//! - [`regression`] - Threshold-based regression detection
//! - [`io`] - Document loading and comparison-snapshot persistence

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod comparison;
pub mod error;
pub mod extract;
pub mod io;
pub mod regression;
pub mod report;

pub use comparison::{compare, ComparisonSet, MetricComparison};
pub use error::{Error, Result};
pub use extract::metric_ratio;
pub use regression::check_regressions;
pub use report::render;
