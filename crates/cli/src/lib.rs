//! CLI for benchdiff.
//!
//! Compares two benchmark-result JSON documents and reports per-metric
//! change, optionally failing when a regression exceeds a threshold.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Result;
use benchdiff_compare::{check_regressions, compare, io, report, Error};
use clap::Parser;
use std::path::PathBuf;

/// Compare benchmark results against a baseline.
#[derive(Parser, Debug)]
#[command(name = "benchdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the baseline results JSON.
    #[arg(long)]
    pub baseline: PathBuf,

    /// Path to the current results JSON.
    #[arg(long)]
    pub current: PathBuf,

    /// Specific metric to compare (default: all metrics in the baseline).
    #[arg(long)]
    pub metric: Option<String>,

    /// Fail if any metric regresses by more than this fraction
    /// (e.g. 0.05 for 5%).
    #[arg(long, value_name = "FRACTION")]
    pub fail_on_regression: Option<f64>,

    /// Write the comparison as JSON to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Parse the process arguments and run the comparison.
pub fn run() -> Result<()> {
    execute(&Cli::parse())
}

/// Run the comparison pipeline for an already-parsed invocation.
///
/// Prints the comparison table (and, when requested, the regression
/// report) to standard output. Every failure path returns an error; the
/// caller maps it to exit code 1.
pub fn execute(cli: &Cli) -> Result<()> {
    let baseline = io::load_document(&cli.baseline)?;
    let current = io::load_document(&cli.current)?;

    let comparisons = compare(&baseline, &current, cli.metric.as_deref());
    if comparisons.is_empty() {
        return Err(Error::NoComparableMetrics.into());
    }

    print!("{}", report::render(&comparisons));

    if let Some(path) = &cli.output {
        io::write_comparison(&comparisons, path)?;
        println!("\nComparison saved to: {}", path.display());
    }

    if let Some(threshold) = cli.fail_on_regression {
        let regressions = check_regressions(&comparisons, threshold);
        if regressions.is_empty() {
            println!(
                "\nNo regressions detected (threshold: {:.1}%)",
                threshold * 100.0
            );
        } else {
            println!(
                "\nERROR: Regressions detected (threshold: {:.1}%):",
                threshold * 100.0
            );
            for regression in &regressions {
                println!("  - {}", regression);
            }
            return Err(Error::RegressionDetected {
                count: regressions.len(),
                threshold_pct: threshold * 100.0,
            }
            .into());
        }
    }

    Ok(())
}
