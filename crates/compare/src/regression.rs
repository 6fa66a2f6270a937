//! Threshold-based regression detection.

use crate::comparison::ComparisonSet;

/// Collect the metrics that regressed beyond `threshold`.
///
/// `threshold` is a fraction of the baseline (0.05 means 5%). A metric
/// regresses when its ratio dropped and the magnitude of the percent
/// change exceeds the threshold. Every offender is reported, in set
/// order, as `"{name}: {baseline} -> {current} ({change_pct}%)"`.
pub fn check_regressions(comparisons: &ComparisonSet, threshold: f64) -> Vec<String> {
    let mut regressions = Vec::new();

    for (name, comparison) in comparisons.iter() {
        if comparison.change < 0.0 && comparison.change_pct.abs() > threshold * 100.0 {
            regressions.push(format!(
                "{}: {:.3} -> {:.3} ({:.1}%)",
                name, comparison.baseline, comparison.current, comparison.change_pct
            ));
        }
    }

    regressions
}
